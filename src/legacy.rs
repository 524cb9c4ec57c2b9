//! Double JSON encoding for legacy form fields.
//!
//! Several document endpoints still run the API's historical parser, which
//! expects certain fields to hold a JSON *string* containing the JSON-encoded
//! value: `"comment": "\"text\""`, `"skip_email": "false"`. Fields opt in one
//! at a time with `#[serde(serialize_with = "legacy::quoted")]`.

use serde::{ser::Error as _, Serialize, Serializer};

/// JSON-encode `value` into a string.
pub(crate) fn quote<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Serialize `value` as the string holding its JSON encoding.
pub(crate) fn quoted<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize + ?Sized,
    S: Serializer,
{
    let encoded = quote(value).map_err(S::Error::custom)?;
    serializer.serialize_str(&encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        #[serde(serialize_with = "quoted")]
        text: String,
        #[serde(serialize_with = "quoted")]
        flag: bool,
        #[serde(serialize_with = "quoted")]
        items: Vec<u32>,
        plain: String,
    }

    #[test]
    fn test_quoted_fields() {
        let sample = Sample {
            text: "hello".to_string(),
            flag: false,
            items: vec![1, 2],
            plain: "as-is".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&sample).unwrap(),
            json!({
                "text": "\"hello\"",
                "flag": "false",
                "items": "[1,2]",
                "plain": "as-is"
            })
        );
    }

    #[test]
    fn test_quote_empty_string() {
        assert_eq!(quote("").unwrap(), "\"\"");
    }
}
