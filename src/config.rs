use std::path::PathBuf;

/// Runtime settings, built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Converter binary.
    pub pandoc: PathBuf,
    /// File to open at startup.
    pub open: Option<PathBuf>,
    /// Document to import through the converter at startup.
    pub import: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pandoc: PathBuf::from("pandoc"),
            open: None,
            import: None,
        }
    }
}
