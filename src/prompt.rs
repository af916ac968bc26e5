//! Interactive yes/no gate.
//!
//! Commands ask for confirmation through [`Confirmer`] so the decision can be
//! scripted in tests. A declined confirmation becomes
//! [`ComplexityError::Cancelled`] in the command layer.

use crate::errors::ComplexityError;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::io::IsTerminal;

pub trait Confirmer: Send + Sync {
    /// Ask `message`; `true` means proceed.
    fn confirm(&self, message: &str) -> Result<bool, ComplexityError>;
}

/// Prompts on the terminal, defaulting to "no".
///
/// When stdin is not a terminal nobody can answer, so the question is
/// declined without blocking.
#[derive(Debug, Default, Clone)]
pub struct TerminalConfirmer;

impl TerminalConfirmer {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, message: &str) -> Result<bool, ComplexityError> {
        if !std::io::stdin().is_terminal() {
            tracing::warn!(prompt = message, "stdin is not a terminal, declining confirmation");
            return Ok(false);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| ComplexityError::Io {
                message: format!("Failed to read confirmation: {e}"),
                path: None,
                source: None,
            })
    }
}
