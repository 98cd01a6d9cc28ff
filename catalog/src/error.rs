//! Catalog error type

use thiserror::Error;

/// Errors raised while normalizing records or answering queries.
///
/// Normalization failures ([`CatalogError::MalformedRecord`]) are recovered by
/// the loader, which drops the record. Every other variant signals a bad
/// query parameter from the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Malformed record: missing or invalid {field}")]
    MalformedRecord { field: &'static str },

    #[error("Unknown type tag: {0}")]
    UnknownType(String),

    #[error("Unknown sort criterion: {0}")]
    UnknownSortCriterion(String),

    #[error("Unknown generation: {0}")]
    UnknownGeneration(String),

    #[error("Invalid id range: {min} > {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("Team has {size} members, at most {max} allowed")]
    TeamTooLarge { size: usize, max: usize },

    #[error("Team is full ({max} members)")]
    TeamFull { max: usize },

    #[error("No team member at index {0}")]
    InvalidTeamIndex(usize),
}
