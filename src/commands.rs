//! Command table: identifiers, menu labels and key bindings mapped to the
//! session operation each one runs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::{Outcome, SessionController};
use crate::surfaces::{Notice, Surfaces};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    New,
    Open,
    Import,
    Save,
    SaveAs,
    Export,
    ExportPandoc,
    CopyHtml,
    Exit,
    ViewSource,
    ViewRendered,
    ToggleView,
    About,
}

/// A key combination. Character keys are stored lowercase; Shift is carried
/// in the modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    /// Normalizes a terminal key event: uppercase letters become lowercase
    /// plus Shift, so Ctrl+Shift+O matches however the terminal reports it.
    pub fn from_event(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                modifiers: key.modifiers | KeyModifiers::SHIFT,
                code: KeyCode::Char(c.to_ascii_lowercase()),
            },
            code => Self {
                modifiers: key.modifiers,
                code,
            },
        }
    }

    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".into());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt".into());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".into());
        }
        parts.push(match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        });
        parts.join("+")
    }
}

pub type Handler = fn(&mut SessionController, &mut dyn Surfaces) -> Outcome;

pub struct CommandSpec {
    pub command: Command,
    pub id: &'static str,
    pub label: &'static str,
    /// First binding is the one shown in help.
    pub keys: &'static [KeyBinding],
    pub handler: Handler,
}

const CTRL: KeyModifiers = KeyModifiers::CONTROL;
const ALT: KeyModifiers = KeyModifiers::ALT;
const CTRL_SHIFT: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::SHIFT);
const NONE: KeyModifiers = KeyModifiers::NONE;

const fn ch(modifiers: KeyModifiers, c: char) -> KeyBinding {
    KeyBinding::new(modifiers, KeyCode::Char(c))
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::New,
        id: "new",
        label: "New",
        keys: &[ch(CTRL, 'n')],
        handler: |c, ui| c.new_document(ui),
    },
    CommandSpec {
        command: Command::Open,
        id: "open",
        label: "Open",
        keys: &[ch(CTRL, 'o')],
        handler: |c, ui| c.open(ui),
    },
    CommandSpec {
        command: Command::Import,
        id: "import",
        label: "Import other filetype",
        keys: &[ch(CTRL_SHIFT, 'o'), ch(ALT, 'o')],
        handler: |c, ui| c.import(ui),
    },
    CommandSpec {
        command: Command::Save,
        id: "save",
        label: "Save",
        keys: &[ch(CTRL, 's')],
        handler: |c, ui| c.save(ui),
    },
    CommandSpec {
        command: Command::SaveAs,
        id: "save-as",
        label: "Save As",
        keys: &[ch(CTRL_SHIFT, 's'), ch(ALT, 's')],
        handler: |c, ui| c.save_as(ui),
    },
    CommandSpec {
        command: Command::Export,
        id: "export",
        label: "Export (simple)",
        keys: &[ch(CTRL, 'e')],
        handler: |c, ui| c.export(ui),
    },
    CommandSpec {
        command: Command::ExportPandoc,
        id: "export-pandoc",
        label: "Export (with Pandoc)",
        keys: &[ch(CTRL_SHIFT, 'e'), ch(ALT, 'e')],
        handler: |c, ui| c.export_with_converter(ui),
    },
    CommandSpec {
        command: Command::CopyHtml,
        id: "copy-html",
        label: "Copy HTML to Clipboard",
        keys: &[ch(CTRL_SHIFT, 'c'), ch(ALT, 'c')],
        handler: |c, ui| c.copy_html(ui),
    },
    CommandSpec {
        command: Command::Exit,
        id: "exit",
        label: "Exit",
        keys: &[ch(CTRL, 'q')],
        handler: |c, ui| c.exit(ui),
    },
    CommandSpec {
        command: Command::ViewSource,
        id: "view-source",
        label: "Markdown view",
        keys: &[ch(CTRL, '1'), ch(ALT, '1')],
        handler: |c, _| {
            c.show_source();
            Outcome::Completed
        },
    },
    CommandSpec {
        command: Command::ViewRendered,
        id: "view-rendered",
        label: "HTML view",
        keys: &[ch(CTRL, '2'), ch(ALT, '2')],
        handler: |c, _| {
            c.show_rendered();
            Outcome::Completed
        },
    },
    CommandSpec {
        command: Command::ToggleView,
        id: "toggle-view",
        label: "Switch to/from HTML",
        keys: &[KeyBinding::new(NONE, KeyCode::F(4))],
        handler: |c, _| {
            c.toggle_view();
            Outcome::Completed
        },
    },
    CommandSpec {
        command: Command::About,
        id: "about",
        label: "About",
        keys: &[KeyBinding::new(NONE, KeyCode::F(1))],
        handler: |_, ui| {
            ui.notify(Notice::About);
            Outcome::Completed
        },
    },
];

impl Command {
    pub fn spec(self) -> &'static CommandSpec {
        COMMANDS
            .iter()
            .find(|s| s.command == self)
            .unwrap_or_else(|| unreachable!("every command has a table entry"))
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }

    pub fn from_id(id: &str) -> Option<Self> {
        COMMANDS.iter().find(|s| s.id == id).map(|s| s.command)
    }

    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        let binding = KeyBinding::from_event(key);
        COMMANDS
            .iter()
            .find(|s| s.keys.contains(&binding))
            .map(|s| s.command)
    }

    pub fn run(self, controller: &mut SessionController, ui: &mut dyn Surfaces) -> Outcome {
        let spec = self.spec();
        tracing::debug!(command = spec.id, "running command");
        (spec.handler)(controller, ui)
    }
}
