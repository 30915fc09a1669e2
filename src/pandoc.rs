//! External document converter. Pandoc is optional: every caller checks
//! [`Converter::is_available`] before relying on it.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use thiserror::Error;

/// Errors that can occur when invoking pandoc.
#[derive(Error, Debug)]
pub enum PandocError {
    /// Pandoc is not installed or not found on PATH.
    #[error("pandoc is not installed")]
    NotInstalled,
    /// Pandoc ran but exited with a non-zero status.
    #[error("pandoc exited with code {exit_code}: {stderr}")]
    ConversionFailed { stderr: String, exit_code: i32 },
    /// An I/O error occurred while spawning the process.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Output options for [`Converter::to_html_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Produce a complete document (`-s`) rather than a fragment.
    pub standalone: bool,
    /// Include the MathJax script so TeX math renders in the browser.
    pub math: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            math: true,
        }
    }
}

/// Translates between markdown and other document formats.
pub trait Converter {
    /// Presence check, done at call time rather than at startup.
    fn is_available(&self) -> bool;

    /// Converts any supported document to markdown text.
    fn to_markdown(&self, source: &Path) -> Result<String, PandocError>;

    /// Converts a markdown file to an HTML file.
    fn to_html_file(
        &self,
        markdown_path: &Path,
        html_path: &Path,
        options: HtmlOptions,
    ) -> Result<(), PandocError>;
}

/// [`Converter`] backed by the pandoc binary.
#[derive(Debug, Clone)]
pub struct Pandoc {
    binary: PathBuf,
}

impl Default for Pandoc {
    fn default() -> Self {
        Self::new("pandoc")
    }
}

impl Pandoc {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run(&self, cmd: &mut Command) -> Result<Output, PandocError> {
        let output = cmd.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                PandocError::NotInstalled
            } else {
                PandocError::Io(e)
            }
        })?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(PandocError::ConversionFailed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                exit_code: output.status.code().unwrap_or(-1),
            })
        }
    }
}

impl Converter for Pandoc {
    fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Pandoc infers the input format from the file extension.
    fn to_markdown(&self, source: &Path) -> Result<String, PandocError> {
        let output = self.run(
            Command::new(&self.binary)
                .arg(source)
                .arg("--to=markdown")
                .arg("--wrap=none"),
        )?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn to_html_file(
        &self,
        markdown_path: &Path,
        html_path: &Path,
        options: HtmlOptions,
    ) -> Result<(), PandocError> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(markdown_path)
            .arg("--from=markdown")
            .arg("--to=html")
            .arg("-o")
            .arg(html_path);
        if options.standalone {
            cmd.arg("-s");
        }
        if options.math {
            cmd.arg("--mathjax");
        }
        self.run(&mut cmd)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn is_available_does_not_panic() {
        // Just ensure it returns a bool without panicking
        let _ = Pandoc::default().is_available();
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let pandoc = Pandoc::new("/nonexistent/bin/pandoc-ame-test");
        assert!(!pandoc.is_available());
    }

    #[test]
    fn missing_binary_reports_not_installed() {
        let dir = TempDir::new().unwrap();
        let md_path = dir.path().join("in.md");
        fs::write(&md_path, "# Hi").unwrap();

        let pandoc = Pandoc::new("/nonexistent/bin/pandoc-ame-test");
        let err = pandoc.to_markdown(&md_path).unwrap_err();
        assert!(matches!(err, PandocError::NotInstalled), "got {:?}", err);
    }

    #[test]
    fn default_html_options_are_standalone_with_math() {
        let opts = HtmlOptions::default();
        assert!(opts.standalone);
        assert!(opts.math);
    }

    #[test]
    fn conversion_failed_display() {
        let err = PandocError::ConversionFailed {
            stderr: "Unknown input format".to_string(),
            exit_code: 21,
        };
        assert_eq!(
            err.to_string(),
            "pandoc exited with code 21: Unknown input format"
        );
    }

    #[test]
    fn html_file_is_standalone_with_mathjax() {
        let pandoc = Pandoc::default();
        if !pandoc.is_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let md_path = dir.path().join("math.md");
        let html_path = dir.path().join("math.html");
        fs::write(&md_path, "# Sum\n\n$a^2 + b^2$").unwrap();

        pandoc
            .to_html_file(&md_path, &html_path, HtmlOptions::default())
            .unwrap();
        let html = fs::read_to_string(&html_path).unwrap();
        assert!(html.contains("<html"), "should be a full document");
        assert!(html.to_lowercase().contains("mathjax"), "should include MathJax");
    }

    #[test]
    fn html_round_trips_to_markdown() {
        let pandoc = Pandoc::default();
        if !pandoc.is_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let html_path = dir.path().join("page.html");
        fs::write(&html_path, "<h1>Hello</h1><p>This is a test paragraph.</p>").unwrap();

        let markdown = pandoc.to_markdown(&html_path).unwrap();
        assert!(markdown.contains("Hello"), "got: {}", markdown);
        assert!(markdown.contains("test paragraph"), "got: {}", markdown);
    }
}
