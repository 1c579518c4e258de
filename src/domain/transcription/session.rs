//! Transcription session state machine

use std::fmt;
use thiserror::Error;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranscribeState {
    #[default]
    Idle,
    Busy,
    Success,
    Error,
}

impl TranscribeState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Busy => "busy",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for TranscribeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: TranscribeState,
    pub action: String,
}

/// Transcription session entity.
/// Manages state transitions for one request lifecycle.
///
/// State machine:
///   IDLE -> BUSY (begin)
///   BUSY -> SUCCESS (succeed)
///   BUSY -> ERROR (fail)
///   SUCCESS -> IDLE (reset)
///   ERROR -> IDLE (reset)
///
/// No other transitions are legal; in particular, starting a new
/// transcription while one is in flight is rejected.
#[derive(Debug, Default)]
pub struct TranscribeSession {
    state: TranscribeState,
}

impl TranscribeSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: TranscribeState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> TranscribeState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == TranscribeState::Idle
    }

    /// Check if a request is in flight
    pub fn is_busy(&self) -> bool {
        self.state == TranscribeState::Busy
    }

    /// Transition from IDLE to BUSY
    pub fn begin(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != TranscribeState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start a transcription".to_string(),
            });
        }
        self.state = TranscribeState::Busy;
        Ok(())
    }

    /// Transition from BUSY to SUCCESS
    pub fn succeed(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != TranscribeState::Busy {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "record a success".to_string(),
            });
        }
        self.state = TranscribeState::Success;
        Ok(())
    }

    /// Transition from BUSY to ERROR
    pub fn fail(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != TranscribeState::Busy {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "record a failure".to_string(),
            });
        }
        self.state = TranscribeState::Error;
        Ok(())
    }

    /// Transition from SUCCESS or ERROR back to IDLE.
    /// This is the only recovery path after a finished attempt.
    pub fn reset(&mut self) -> Result<(), InvalidStateTransition> {
        match self.state {
            TranscribeState::Success | TranscribeState::Error => {
                self.state = TranscribeState::Idle;
                Ok(())
            }
            _ => Err(InvalidStateTransition {
                current_state: self.state,
                action: "reset".to_string(),
            }),
        }
    }
}
