//! Lenient field decoding for rows coming back from the catalog store.
//!
//! Older rows were written by hand through the hosted dashboard, so columns
//! that should hold a list sometimes hold a comma separated string, an
//! array literal, or nothing at all.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    Items(Vec<Option<String>>),
    Text(String),
}

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|entry| entry.trim().trim_matches('"').trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode a list of strings from an array, an array literal held in a
/// string (`["a","b"]` or `{a,b}`), a comma separated string or null.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawList>::deserialize(deserializer)?;

    Ok(match raw {
        None => Vec::new(),
        Some(RawList::Items(items)) => items
            .into_iter()
            .flatten()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        Some(RawList::Text(text)) => {
            let text = text.trim();
            let inner = text
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .or_else(|| {
                    text.strip_prefix('{')
                        .and_then(|rest| rest.strip_suffix('}'))
                })
                .unwrap_or(text);

            split_list(inner)
        }
    })
}

/// Decode a nullable text column into a plain string.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an optional text column, treating blank strings as absent.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|value| !value.trim().is_empty()))
}
