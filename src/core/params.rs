use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

/// Prompt-session parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    pub prompt: String,
    /// Lines that end the session, compared case-insensitively
    pub quit_words: Vec<String>,
    pub format: OutputFormat,
    /// Print the title and usage lines before the first prompt
    pub banner: bool,
}

impl SessionParams {
    pub fn is_quit(&self, line: &str) -> bool {
        self.quit_words.iter().any(|w| w.eq_ignore_ascii_case(line))
    }
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            prompt: "Roman numeral: ".to_string(),
            quit_words: vec!["q".to_string(), "quit".to_string()],
            format: OutputFormat::Text,
            banner: true,
        }
    }
}
