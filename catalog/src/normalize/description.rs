//! Flavor text language selection

use pokego_protocol::RawFlavorText;

/// Text used when no entry in a supported language exists
pub const FALLBACK_DESCRIPTION: &str = "Um Pokémon misterioso.";

const PREFERRED_LANGUAGES: &[&str] = &["pt", "pt-BR"];
const SECONDARY_LANGUAGE: &str = "en";

/// Pick the description for a species.
///
/// Portuguese (`pt` or `pt-BR`) wins over English; the first matching entry
/// in provider order is used. Line feeds and form feeds become spaces.
pub fn select_description(entries: &[RawFlavorText]) -> String {
    first_text(entries, |lang| PREFERRED_LANGUAGES.contains(&lang))
        .or_else(|| first_text(entries, |lang| lang == SECONDARY_LANGUAGE))
        .map(clean_flavor_text)
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
}

fn first_text(entries: &[RawFlavorText], accept: impl Fn(&str) -> bool) -> Option<&str> {
    entries.iter().find_map(|entry| {
        let language = entry.language()?;
        let text = entry.flavor_text.as_deref()?;
        accept(language).then_some(text)
    })
}

fn clean_flavor_text(text: &str) -> String {
    text.replace(['\n', '\u{000C}'], " ")
}
