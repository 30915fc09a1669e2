use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;

use ame::app::{App, TerminalSurfaces};
use ame::config::Config;
use ame::error::AmeError;
use ame::logging::{self, LogConfig, LogTarget};
use ame::markdown::{self, shell};
use ame::pandoc::{Converter, HtmlOptions, Pandoc};
use ame::textio;

#[derive(Parser)]
#[command(name = "ame", version, about = "An accessible terminal markdown editor")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Markdown file to open
    file: Option<PathBuf>,

    /// Start by importing this document through pandoc
    #[arg(long, value_name = "FILE", conflicts_with = "file")]
    import: Option<PathBuf>,

    /// Pandoc binary used for import and converter export
    #[arg(long, env = "AME_PANDOC", default_value = "pandoc", global = true)]
    pandoc: PathBuf,

    /// Append log lines to this file
    #[arg(long, env = "AME_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, default_value = "info", value_parser = logging::parse_level, global = true)]
    log_level: Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Export markdown to HTML without opening the editor
    Export {
        /// Markdown file to export
        file: PathBuf,
        /// Output .html path (defaults to same name with .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Convert with pandoc (standalone page, MathJax) instead of the built-in renderer
        #[arg(long)]
        pandoc_html: bool,
    },
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Export {
        file,
        output,
        pandoc_html,
    }) = &cli.command
    {
        logging::init_logging(&LogConfig::new(
            cli.log_level,
            cli.log_file.clone(),
            LogTarget::Stderr,
        ))?;
        let output = output.clone().unwrap_or_else(|| file.with_extension("html"));
        let converter = pandoc_html.then(|| Pandoc::new(&cli.pandoc));
        return match handle_export(file, &output, converter.as_ref()) {
            Ok(()) => {
                println!("Exported to {}", output.display());
                Ok(())
            }
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        };
    }

    logging::init_logging(&LogConfig::new(
        cli.log_level,
        cli.log_file.clone(),
        LogTarget::Discard,
    ))?;

    let config = Config {
        pandoc: cli.pandoc,
        open: cli.file,
        import: cli.import,
    };
    run_editor(&config)
}

/// Handles `ame export file.md`: writes the HTML page and exits.
fn handle_export(file: &Path, output: &Path, converter: Option<&Pandoc>) -> Result<(), AmeError> {
    match converter {
        Some(pandoc) => {
            if !pandoc.is_available() {
                return Err(ame::pandoc::PandocError::NotInstalled.into());
            }
            pandoc.to_html_file(file, output, HtmlOptions::default())?;
        }
        None => {
            let text = textio::read_file(file)?;
            let html = markdown::to_html(&text);
            textio::write_file(output, &shell::wrap(&html))?;
        }
    }
    tracing::info!(source = %file.display(), output = %output.display(), "exported");
    Ok(())
}

/// Sets up the terminal, runs the TUI editor, and restores the terminal on exit.
fn run_editor(config: &Config) -> io::Result<()> {
    // Setup panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, config);

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "editor stopped");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &Config) -> io::Result<()> {
    let mut app = App::from_config(config);
    tracing::info!("editor started");

    let result = event_loop(&mut app, terminal, config);
    match &result {
        Ok(()) => tracing::info!("editor closed"),
        // The terminal went away; nothing is left to ask
        Err(e) => {
            app.report_lost_changes(e);
        }
    }
    result
}

fn event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
) -> io::Result<()> {
    // The first frame goes up before any startup prompt draws over it.
    app.render_frame(terminal)?;
    app.startup(config, &mut TerminalSurfaces::new(terminal));

    while !app.should_quit {
        app.render_frame(terminal)?;

        // Block up to 100ms waiting for the first event (prevents busy-loop,
        // gives tick() a chance to run ~10x/sec for timer expiry).
        if event::poll(Duration::from_millis(100))? {
            // Drain all queued events without blocking, then render immediately.
            loop {
                let ev = event::read()?;
                app.handle_event(ev, &mut TerminalSurfaces::new(terminal));
                if app.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    Ok(())
}
