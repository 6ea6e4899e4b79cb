//! Line input from stdin

use std::io::{self, BufRead, Write};

use kino_client::Prompter;

pub struct Terminal {
    stdin: io::Stdin,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    /// Read a secret without echoing it; `None` on end of input or a read error
    pub fn ask_secret(&mut self, label: &str) -> Option<String> {
        match rpassword::prompt_password(format!("{label}: ")) {
            Ok(secret) => Some(secret.trim().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read hidden input");
                None
            }
        }
    }

    /// Read one trimmed line; `None` on end of input or a read error
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        if let Err(e) = io::stdout().flush() {
            tracing::debug!(error = %e, "stdout flush failed");
        }
        let mut input = String::new();
        match self.stdin.lock().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read input");
                None
            }
        }
    }

    /// Ask for a field, offering `default` when it is not empty
    pub fn ask(&mut self, label: &str, default: &str) -> Option<String> {
        let prompt = if default.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{default}]: ")
        };
        let input = self.read_line(&prompt)?;
        if input.is_empty() {
            Some(default.to_string())
        } else {
            Some(input)
        }
    }
}

impl Prompter for Terminal {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.read_line(&format!("{message}: "))
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.read_line(&format!("{message} [y/N]: "))
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
