//! Deserializers that normalize loosely typed backend payloads.
//!
//! Every function here accepts any JSON value and maps it onto the field's zero value when the
//! shape is unexpected, so a profile snapshot never fails to decode because of a single field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field. Numbers are rendered as text; `0`, `false`, `null` and blank strings are absent.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value))
}

fn text_from_value(value: Value) -> Option<String> {
    let raw = match value {
        Value::String(raw) => raw,
        Value::Number(number) => {
            if number.as_f64() == Some(0.0) {
                return None;
            }
            number.to_string()
        }
        Value::Bool(true) => "true".to_string(),
        _ => return None,
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Non-negative counter. Arrays count their elements, numeric strings are parsed.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value).unwrap_or(0))
}

/// Counter whose absence is meaningful (authoritative totals, referral overrides).
pub(crate) fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

fn count_from_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(_) | Value::String(_) => signed_from_value(value).map(clamp_to_u32),
        Value::Array(items) => Some(u32::try_from(items.len()).unwrap_or(u32::MAX)),
        _ => None,
    }
}

/// Signed integer, used for deductions; anything unparseable is `0`.
pub(crate) fn signed<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(signed_from_value).unwrap_or(0))
}

fn signed_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
            .or_else(|| number.as_f64().map(|n| n.trunc() as i64)),
        Value::String(raw) => {
            let trimmed = raw.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|n| n.trunc() as i64))
        }
        _ => None,
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Repeated values. Array elements are kept one-for-one so the list length matches the payload;
/// null elements become empty strings and structured entries (uploaded documents, certification
/// objects) are kept as compact JSON. A bare non-blank string counts as a single entry.
pub(crate) fn entries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let entries = match value {
        Some(Value::Array(items)) => items.into_iter().map(entry_from_value).collect(),
        Some(Value::String(raw)) if raw.trim().is_empty() => Vec::new(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![entry_from_value(other)],
    };
    Ok(entries)
}

fn entry_from_value(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(raw) => raw,
        other => other.to_string(),
    }
}

/// Nested record. Anything other than an object decodes as the record's default.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(record_from_value).unwrap_or_default())
}

/// Repeated nested records. A single object is treated as a one-element list; array positions
/// are preserved, so a null element decodes as an empty record rather than being skipped.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let records = match value {
        Some(Value::Array(items)) => items.into_iter().map(record_from_value).collect(),
        Some(object @ Value::Object(_)) => vec![record_from_value(object)],
        _ => Vec::new(),
    };
    Ok(records)
}

fn record_from_value<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

/// Strips the `{ "success": .., "data": {..} }` envelope the profile endpoints wrap records in.
pub(crate) fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if map.get("data").is_some_and(Value::is_object)
                && map
                    .keys()
                    .all(|key| matches!(key.as_str(), "success" | "message" | "data")) =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Leading number of free-form values such as `"5+"`, `"0-10"` or `"1,000+"`.
pub(crate) fn leading_number(raw: &str) -> Option<u32> {
    let mut digits = String::new();
    for ch in raw.trim().chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if ch == ',' && !digits.is_empty() {
            continue;
        } else {
            break;
        }
    }
    if digits.is_empty() {
        None
    } else {
        Some(digits.parse::<u64>().map(|n| n.min(u64::from(u32::MAX)) as u32).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "count")]
        total: u32,
        #[serde(default, deserialize_with = "signed")]
        delta: i64,
        #[serde(default, deserialize_with = "entries")]
        items: Vec<String>,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).expect("probe decodes")
    }

    #[test]
    fn text_treats_blank_and_falsy_values_as_absent() {
        assert_eq!(probe(json!({ "label": "   " })).label, None);
        assert_eq!(probe(json!({ "label": 0 })).label, None);
        assert_eq!(probe(json!({ "label": false })).label, None);
        assert_eq!(probe(json!({ "label": null })).label, None);
        assert_eq!(probe(json!({ "label": 2019 })).label.as_deref(), Some("2019"));
        assert_eq!(probe(json!({ "label": " Dubai " })).label.as_deref(), Some("Dubai"));
    }

    #[test]
    fn count_accepts_numbers_strings_and_arrays() {
        assert_eq!(probe(json!({ "total": 7 })).total, 7);
        assert_eq!(probe(json!({ "total": "12" })).total, 12);
        assert_eq!(probe(json!({ "total": [1, 2, 3] })).total, 3);
        assert_eq!(probe(json!({ "total": -4 })).total, 0);
        assert_eq!(probe(json!({ "total": { "nested": true } })).total, 0);
        assert_eq!(probe(json!({ "total": "many" })).total, 0);
    }

    #[test]
    fn signed_keeps_negative_values() {
        assert_eq!(probe(json!({ "delta": -15 })).delta, -15);
        assert_eq!(probe(json!({ "delta": "20" })).delta, 20);
        assert_eq!(probe(json!({ "delta": 12.9 })).delta, 12);
    }

    #[test]
    fn entries_keep_every_array_element() {
        let decoded = probe(json!({ "items": ["rust", null, "", { "url": "cv.pdf" }] }));
        assert_eq!(decoded.items.len(), 4);
        assert_eq!(decoded.items[1], "");
        assert_eq!(probe(json!({ "items": [""] })).items.len(), 1);
        assert_eq!(probe(json!({ "items": "Full-time" })).items, vec!["Full-time"]);
        assert!(probe(json!({ "items": "  " })).items.is_empty());
        assert!(probe(json!({ "items": [] })).items.is_empty());
        assert!(probe(json!({ "items": null })).items.is_empty());
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Role {
        #[serde(default, deserialize_with = "text")]
        title: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    struct History {
        #[serde(default, deserialize_with = "records")]
        roles: Vec<Role>,
    }

    #[test]
    fn records_keep_null_positions() {
        let history: History = serde_json::from_value(json!({
            "roles": [null, { "title": "Chef" }]
        }))
        .expect("history decodes");
        assert_eq!(history.roles.len(), 2);
        assert_eq!(history.roles[0], Role::default());
        assert_eq!(history.roles[1].title.as_deref(), Some("Chef"));
    }

    #[test]
    fn envelope_is_unwrapped_only_when_it_looks_like_one() {
        let wrapped = json!({ "success": true, "data": { "fullName": "Sara" } });
        assert_eq!(unwrap_envelope(wrapped), json!({ "fullName": "Sara" }));

        let profile = json!({ "data": { "x": 1 }, "fullName": "Sara" });
        assert_eq!(unwrap_envelope(profile.clone()), profile);
    }

    #[test]
    fn leading_number_reads_ranges_and_suffixes() {
        assert_eq!(leading_number("0-10"), Some(0));
        assert_eq!(leading_number("501-1000"), Some(501));
        assert_eq!(leading_number("1,000+"), Some(1000));
        assert_eq!(leading_number(" 7 years"), Some(7));
        assert_eq!(leading_number("ten"), None);
    }
}
