//! Shell configuration

use std::path::PathBuf;

/// Prompt shown before each command by default
pub const DEFAULT_PROMPT: &str = "> ";

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Catalog file (text or XML)
    pub catalog_path: PathBuf,

    /// Text written before each command is read
    pub prompt: String,

    /// Fixed seed for random playback (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl ShellConfig {
    /// Create a new shell configuration
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            prompt: DEFAULT_PROMPT.to_string(),
            seed: None,
        }
    }

    /// Set the command prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Make random playback reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
