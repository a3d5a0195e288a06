//! Generator state machine.
//!
//! Tracks what the QR area shows:
//! - nothing yet (`Idle`)
//! - an inline error after a rejected input (`Error`)
//! - a symbol for the last accepted URL (`Ready`)
//!
//! Editing the input never changes the status. Only an explicit generate does,
//! and a rejected input clears whatever symbol was shown before.

use crate::{ErrorCorrection, HexColor, QrateError, ValidatedTarget, symbol, validate};

/// What the QR area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GeneratorStatus {
    #[default]
    Idle,
    /// Inline message for the last rejected input.
    Error(String),
    /// A symbol for `target`, painted in `foreground`.
    Ready {
        target: ValidatedTarget,
        foreground: HexColor,
    },
}

impl GeneratorStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&ValidatedTarget> {
        match self {
            Self::Ready { target, .. } => Some(target),
            _ => None,
        }
    }
}

/// User actions that move the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorCommand {
    /// Validate the given input and show its symbol or an error.
    Generate(String),
    /// Repaint with a new foreground. Does not re-validate.
    SetForeground(HexColor),
}

/// Session state behind the generate form.
#[derive(Debug, Clone)]
pub struct GeneratorState {
    status: GeneratorStatus,
    foreground: HexColor,
    error_correction: ErrorCorrection,
    invalid_attempts: u32,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new(HexColor::default(), ErrorCorrection::default())
    }
}

impl GeneratorState {
    /// `error_correction` is used to reject inputs that cannot fit in a symbol.
    pub fn new(foreground: HexColor, error_correction: ErrorCorrection) -> Self {
        Self {
            status: GeneratorStatus::Idle,
            foreground,
            error_correction,
            invalid_attempts: 0,
        }
    }

    pub fn status(&self) -> &GeneratorStatus {
        &self.status
    }

    /// The color picker's current value.
    pub fn foreground(&self) -> HexColor {
        self.foreground
    }

    /// Consecutive rejected generate attempts since the last success.
    pub fn invalid_attempts(&self) -> u32 {
        self.invalid_attempts
    }

    /// Applies `command`. A rejected generate is returned as well as shown in `status`.
    pub fn dispatch(&mut self, command: GeneratorCommand) -> Result<(), QrateError> {
        match command {
            GeneratorCommand::Generate(input) => self.generate(&input).map(|_| ()),
            GeneratorCommand::SetForeground(color) => {
                self.set_foreground(color);
                Ok(())
            }
        }
    }

    /// Validates `input` and moves to `Ready` or `Error`.
    pub fn generate(&mut self, input: &str) -> Result<ValidatedTarget, QrateError> {
        let checked = validate(input).and_then(|target| {
            symbol::check_capacity(&target, self.error_correction).map(|()| target)
        });

        match checked {
            Ok(target) => {
                log::info!("Generating QR code for {target}");
                self.invalid_attempts = 0;
                self.status = GeneratorStatus::Ready {
                    target: target.clone(),
                    foreground: self.foreground,
                };
                Ok(target)
            }
            Err(err) => {
                self.invalid_attempts = self.invalid_attempts.saturating_add(1);
                log::info!(
                    "Rejected generate input (attempt {}): {err}",
                    self.invalid_attempts
                );
                self.status = GeneratorStatus::Error(err.inline_message());
                Err(err)
            }
        }
    }

    /// Updates the picker color and repaints a shown symbol with it.
    pub fn set_foreground(&mut self, color: HexColor) {
        self.foreground = color;
        if let GeneratorStatus::Ready { foreground, .. } = &mut self.status {
            log::debug!("Foreground changed to {color}");
            *foreground = color;
        }
    }

    /// Leaves `Ready` after the shown target could not be painted.
    pub fn fail(&mut self, err: &QrateError) {
        log::error!("Dropping QR code after failure: {err}");
        self.status = GeneratorStatus::Error(err.inline_message());
    }
}
