//! Colour resource file (`values/colors.xml`) merging.
//!
//! The merge is idempotent: an entry is appended only when no entry of the
//! same name exists, and an existing entry keeps its position. Other entries
//! and formatting in the file are left untouched.

use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::error::{AssetError, Result};

use super::WriteOutcome;

const CLOSING_TAG: &str = "</resources>";

/// A `<color>` entry found in a resources document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourEntry {
    pub name: String,
    pub value: String,
    /// Byte range of the raw value text.
    value_range: Range<usize>,
}

/// Result of merging one entry into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourMerge {
    /// No document existed; a fresh one was produced.
    Created(String),
    /// The entry was missing and has been added.
    Appended(String),
    /// The entry existed with another value, now replaced.
    Replaced(String),
    /// The entry already had this value.
    Unchanged,
}

/// Collect every `<color name="...">value</color>` entry in document order.
/// Entries inside `<!-- ... -->` comments are ignored.
pub fn parse_colours(doc: &str) -> Vec<ColourEntry> {
    let comments = comment_spans(doc);
    let mut entries = Vec::new();

    for (start, _) in doc.match_indices("<color") {
        if comments.iter().any(|span| span.contains(&start)) {
            continue;
        }
        let Some(tag_len) = doc[start..].find('>') else {
            break;
        };
        let tag = &doc[start..start + tag_len];
        // Skip `<colors`, self-closing tags and the like
        if !tag[6..].starts_with(char::is_whitespace) || tag.ends_with('/') {
            continue;
        }
        let Some(name) = attribute(tag, "name") else {
            continue;
        };

        let value_start = start + tag_len + 1;
        let Some(value_len) = doc[value_start..].find("</color>") else {
            continue;
        };
        let value_range = value_start..value_start + value_len;

        entries.push(ColourEntry {
            name: name.to_string(),
            value: doc[value_range.clone()].trim().to_string(),
            value_range,
        });
    }

    entries
}

/// Merge `name = value` into an optional existing document.
///
/// Fails when the document has no closing `</resources>` tag to insert
/// before.
pub fn merge_colour(
    existing: Option<&str>,
    name: &str,
    value: &str,
) -> std::result::Result<ColourMerge, String> {
    let Some(doc) = existing else {
        return Ok(ColourMerge::Created(fresh_document(&[(name, value)])));
    };

    if let Some(entry) = parse_colours(doc).into_iter().find(|e| e.name == name) {
        if entry.value.eq_ignore_ascii_case(value) {
            return Ok(ColourMerge::Unchanged);
        }
        let mut merged = String::with_capacity(doc.len());
        merged.push_str(&doc[..entry.value_range.start]);
        merged.push_str(value);
        merged.push_str(&doc[entry.value_range.end..]);
        return Ok(ColourMerge::Replaced(merged));
    }

    let Some(close) = doc.rfind(CLOSING_TAG) else {
        return Err(format!("no {} tag to insert '{}' before", CLOSING_TAG, name));
    };
    let mut merged = String::with_capacity(doc.len() + 64);
    merged.push_str(&doc[..close]);
    merged.push_str(&entry_line(name, value));
    merged.push_str(&doc[close..]);
    Ok(ColourMerge::Appended(merged))
}

/// Merge `name = value` into the colour resource file at `path`.
pub fn merge_colour_file(path: &Path, name: &str, value: &str) -> Result<WriteOutcome> {
    let existing = if path.exists() {
        Some(fs::read_to_string(path).map_err(|e| AssetError::io(path, "Failed to read file", e))?)
    } else {
        None
    };

    let merge = merge_colour(existing.as_deref(), name, value).map_err(|message| {
        AssetError::Resource {
            path: path.to_path_buf(),
            message,
            help: Some("Restore the <resources> root element or delete the file".to_string()),
        }
    })?;

    let (content, outcome) = match merge {
        ColourMerge::Unchanged => return Ok(WriteOutcome::Unchanged),
        ColourMerge::Created(content) => (content, WriteOutcome::Created),
        ColourMerge::Appended(content) | ColourMerge::Replaced(content) => {
            (content, WriteOutcome::Updated)
        }
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AssetError::io(parent, "Failed to create directory", e))?;
    }
    fs::write(path, content).map_err(|e| AssetError::io(path, "Failed to write file", e))?;

    Ok(outcome)
}

/// A resources document holding exactly `entries`.
pub fn fresh_document(entries: &[(&str, &str)]) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
    for (name, value) in entries {
        doc.push_str(&entry_line(name, value));
    }
    doc.push_str(CLOSING_TAG);
    doc.push('\n');
    doc
}

/// Byte ranges of XML comments; an unterminated comment runs to the end.
fn comment_spans(doc: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(open) = doc[from..].find("<!--") {
        let start = from + open;
        let end = doc[start + 4..]
            .find("-->")
            .map_or(doc.len(), |close| start + 4 + close + 3);
        spans.push(start..end);
        from = end;
    }

    spans
}

fn entry_line(name: &str, value: &str) -> String {
    format!("    <color name=\"{}\">{}</color>\n", name, value)
}

/// Value of `key="..."` (or single-quoted) inside a tag.
fn attribute<'a>(tag: &'a str, key: &str) -> Option<&'a str> {
    let mut rest = tag;
    while let Some(pos) = rest.find(key) {
        let before = rest[..pos].chars().last();
        let after = rest[pos + key.len()..].trim_start();
        rest = &rest[pos + key.len()..];

        if !before.is_some_and(char::is_whitespace) {
            continue;
        }
        let Some(after_eq) = after.strip_prefix('=') else {
            continue;
        };
        let after_eq = after_eq.trim_start();
        let quote = after_eq.chars().next()?;
        if quote != '"' && quote != '\'' {
            continue;
        }
        let value = &after_eq[1..];
        return value.find(quote).map(|end| &value[..end]);
    }
    None
}
