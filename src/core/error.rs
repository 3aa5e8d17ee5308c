use thiserror::Error;

/// Misuse of the progression engine. The combat math itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot {action} while {phase}")]
    WrongPhase {
        action: &'static str,
        phase: &'static str,
    },
    #[error("upgrade selection {index} is out of range (offer has {len})")]
    SelectionOutOfRange { index: usize, len: usize },
}
