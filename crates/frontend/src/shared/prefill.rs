//! Paste-JSON prefill
//!
//! Turns pasted text into a partial form patch. Parsing never touches the edit
//! buffer: a failure is reported inline and the form stays as it was.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrefillError {
    #[error("Вставленный текст пуст.")]
    Empty,
    #[error("Не удалось разобрать JSON: {0}")]
    Parse(String),
    #[error("Ожидался JSON-объект с полями формы.")]
    NotAnObject,
}

/// Parse pasted text into a patch type. Unknown fields are ignored.
pub fn parse_patch<T: DeserializeOwned>(text: &str) -> Result<T, PrefillError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PrefillError::Empty);
    }
    let value: Value = serde_json::from_str(text).map_err(|e| PrefillError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(PrefillError::NotAnObject);
    }
    serde_json::from_value(value).map_err(|e| PrefillError::Parse(e.to_string()))
}

/// Integer field that also accepts a numeric string (`"5"`) or `null`
pub fn lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("expected an integer, got {n}")))?,
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}")))?,
        Some(other) => {
            return Err(D::Error::custom(format!("expected an integer, got {other}")));
        }
    };
    T::try_from(raw)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("integer {raw} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Patch {
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient_int")]
        rank: Option<i32>,
    }

    #[test]
    fn test_parses_partial_object() {
        let patch: Patch = parse_patch(r#" {"name":"Станки","extra":[1,2]} "#).unwrap();
        assert_eq!(
            patch,
            Patch {
                name: Some("Станки".into()),
                rank: None
            }
        );
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let patch: Patch = parse_patch(r#"{"rank":"12"}"#).unwrap();
        assert_eq!(patch.rank, Some(12));
        let patch: Patch = parse_patch(r#"{"rank":7,"name":null}"#).unwrap();
        assert_eq!(patch.rank, Some(7));
        assert_eq!(patch.name, None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_patch::<Patch>("   "), Err(PrefillError::Empty));
        assert_eq!(parse_patch::<Patch>("[1,2]"), Err(PrefillError::NotAnObject));
        assert!(matches!(parse_patch::<Patch>("{name:"), Err(PrefillError::Parse(_))));
        assert!(matches!(
            parse_patch::<Patch>(r#"{"rank":"twelve"}"#),
            Err(PrefillError::Parse(_))
        ));
        assert!(matches!(
            parse_patch::<Patch>(r#"{"rank":99999999999}"#),
            Err(PrefillError::Parse(_))
        ));
    }
}
