//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
///
/// The roll engine normalizes its numeric inputs instead of rejecting them,
/// so the only failures a roll can produce come from the random source.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A scripted random source ran out of values mid-roll.
    #[error("random source exhausted")]
    SourceExhausted,

    /// A random source produced a face the die does not have.
    #[error("random source produced {value}, outside 1..={sides}")]
    FaceOutOfRange {
        /// The value that was drawn.
        value: u32,
        /// Number of sides on the die that was requested.
        sides: u32,
    },

    /// The random source backend failed.
    #[error("random source failed: {0}")]
    Source(String),

    /// A ruleset configuration is malformed.
    #[error("invalid rules config: {0}")]
    InvalidConfig(String),

    /// A skill referenced in a check does not exist on the sheet.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// A specialty referenced in a check does not exist on the sheet.
    #[error("unknown specialty: {0}")]
    UnknownSpecialty(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
