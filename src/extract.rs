//! Summary extraction from loosely-structured Exa responses.
//!
//! Exa has returned summaries in at least three shapes: a top-level
//! `summary` string, per-result `summary` or `content.summary` fields, and
//! a `documents` list. Extraction tries each known shape in precedence
//! order and degrades to an empty string when none matches.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Response with a single top-level summary.
#[derive(Debug, Deserialize)]
struct FlatSummary {
    summary: String,
}

/// One entry of a `results` array. Fields that are absent or carry an
/// unexpected type decode to `None` instead of failing the entry.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResultEntry {
    #[serde(deserialize_with = "string_or_none")]
    summary: Option<String>,
    #[serde(deserialize_with = "content_or_none")]
    content: Option<EntryContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EntryContent {
    #[serde(deserialize_with = "string_or_none")]
    summary: Option<String>,
}

/// One entry of a `documents` array.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocumentEntry {
    #[serde(deserialize_with = "string_or_none")]
    summary: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn content_or_none<'de, D>(deserializer: D) -> Result<Option<EntryContent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Picks the best-effort summary string out of an Exa response.
///
/// Candidate shapes are tried in precedence order: a top-level `summary`,
/// then each `results` entry (directly, then under `content`), then each
/// `documents` entry. The first string found wins. Returns an empty string
/// when nothing matches; never fails, whatever the input shape.
#[must_use]
pub fn extract_summary(value: &Value) -> String {
    if let Ok(flat) = FlatSummary::deserialize(value) {
        return flat.summary;
    }

    if let Some(results) = value.get("results").and_then(Value::as_array) {
        for item in results {
            let Ok(entry) = ResultEntry::deserialize(item) else {
                continue;
            };
            if let Some(summary) = entry.summary {
                return summary;
            }
            if let Some(summary) = entry.content.and_then(|c| c.summary) {
                return summary;
            }
        }
    }

    if let Some(documents) = value.get("documents").and_then(Value::as_array) {
        for item in documents {
            let summary = DocumentEntry::deserialize(item)
                .ok()
                .and_then(|d| d.summary);
            if let Some(summary) = summary {
                return summary;
            }
        }
    }

    String::new()
}
