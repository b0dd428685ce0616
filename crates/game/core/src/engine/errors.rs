//! Error types for the match engine.

/// Errors surfaced while driving a match.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchError {
    #[error("match already concluded after {rounds} rounds; reset before playing again")]
    Concluded { rounds: u32 },
}
