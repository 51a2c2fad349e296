//! Error types for the party engine.

/// Errors that can occur while building or running a party.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    /// An adventurer was given a role outside the allowed set.
    #[error("{0} is not a valid role.")]
    InvalidRole(String),
}

/// Convenience result type for party operations.
pub type PartyResult<T> = Result<T, PartyError>;
