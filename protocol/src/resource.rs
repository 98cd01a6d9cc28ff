//! Named resource links and id extraction

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A `{ name, url }` link to another upstream resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl NamedResource {
    /// Numeric id carried by the link's url
    pub fn id(&self) -> Result<u32, ParseError> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| ParseError::MissingField("url".to_string()))?;
        resource_id(url)
    }
}

/// Parse the numeric id from a resource url.
///
/// Upstream urls end with the id followed by a slash
/// (`https://pokeapi.co/api/v2/pokemon-species/4/`), so the id is the last
/// non-empty path segment.
pub fn resource_id(url: &str) -> Result<u32, ParseError> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse::<u32>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| ParseError::InvalidResourceUrl(url.to_string()))
}
