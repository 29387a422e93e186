//! Text handling for serialized `a{sv}` settings dictionaries.
//!
//! The plugin persists its configuration as one GVariant dictionary of
//! string-keyed variant entries. Only the top level is interpreted here: a
//! depth-aware scan splits `'key': <value>` entries so a single field can be
//! replaced while every other entry passes through verbatim. Values stay
//! opaque.

use crate::error::AccentError;

/// Split the top-level entries of a serialized dictionary.
///
/// Accepts an optional `@a{sv}` type prefix. Returns entries like
/// `'borderColor': <(0.1, 0.2, 0.3, 0.8)>`.
pub(crate) fn split_entries(dict: &str) -> Result<Vec<String>, AccentError> {
    let inner = dict_inner(dict)?;

    let mut entries = Vec::new();
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '\'' {
                in_string = false;
            }
            continue;
        }
        match c {
            '\'' => in_string = true,
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => {
                depth -= 1;
                if depth < 0 {
                    return Err(AccentError::MalformedValue(format!(
                        "unbalanced brackets in {:?}",
                        dict
                    )));
                }
            }
            ',' if depth == 0 => {
                push_entry(&mut entries, &inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 || in_string {
        return Err(AccentError::MalformedValue(format!(
            "unterminated entry in {:?}",
            dict
        )));
    }
    push_entry(&mut entries, &inner[start..]);

    Ok(entries)
}

/// Value of `key` in the dictionary, if present.
pub(crate) fn get_entry(dict: &str, key: &str) -> Result<Option<String>, AccentError> {
    for entry in split_entries(dict)? {
        if let Some((k, value)) = split_entry(&entry) {
            if k == key {
                return Ok(Some(value.to_string()));
            }
        }
    }
    Ok(None)
}

/// Replace (or append) `key` with `value`, leaving every other entry
/// untouched. Returns the reassembled dictionary text.
pub(crate) fn set_entry(dict: &str, key: &str, value: &str) -> Result<String, AccentError> {
    let mut entries = split_entries(dict)?;
    let formatted = format!("'{}': {}", key, value);

    let mut replaced = false;
    for entry in entries.iter_mut() {
        if split_entry(entry).map(|(k, _)| k) == Some(key) {
            *entry = formatted.clone();
            replaced = true;
            break;
        }
    }
    if !replaced {
        entries.push(formatted);
    }

    Ok(format!("{{{}}}", entries.join(", ")))
}

fn dict_inner(dict: &str) -> Result<&str, AccentError> {
    let trimmed = dict.trim();
    let trimmed = trimmed
        .strip_prefix("@a{sv}")
        .map(str::trim_start)
        .unwrap_or(trimmed);
    trimmed
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .ok_or_else(|| {
            AccentError::MalformedValue(format!("expected a {{...}} dictionary, got {:?}", dict))
        })
}

fn push_entry(entries: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        entries.push(trimmed.to_string());
    }
}

fn split_entry(entry: &str) -> Option<(&str, &str)> {
    let rest = entry.strip_prefix('\'')?;
    let quote = rest.find('\'')?;
    let key = &rest[..quote];
    let value = rest[quote + 1..].trim_start().strip_prefix(':')?;
    Some((key, value.trim()))
}
