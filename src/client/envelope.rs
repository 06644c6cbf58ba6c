//! Response envelope handling.
//!
//! Most endpoints wrap their payload as
//! `{"status": "ok" | "error", "data": ..., "error": {"message": ...}}`.
//! Endpoints that return bare JSON are passed through unchanged.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// Unwrap a decoded response body.
///
/// Returns the `data` member when the body is an object that has one, the
/// whole body otherwise. An envelope with `status == "error"` becomes
/// [`Error::Api`].
pub(crate) fn unwrap_envelope(body: Value) -> Result<Value> {
    match body {
        Value::Object(mut map) => {
            if map.get("status").and_then(Value::as_str) == Some("error") {
                return Err(Error::from_error_envelope(&Value::Object(map)));
            }
            match map.remove("data") {
                Some(data) => Ok(data),
                None => Ok(Value::Object(map)),
            }
        }
        other => Ok(other),
    }
}

/// Parse a raw body and unwrap its envelope.
pub(crate) fn decode_body(raw: &str) -> Result<Value> {
    let body: Value = serde_json::from_str(raw)?;
    unwrap_envelope(body)
}

/// Decode an unwrapped payload into a typed record.
pub(crate) fn into_record<T: DeserializeOwned>(data: Value) -> Result<T> {
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_yields_data() {
        let data = decode_body(r#"{"status":"ok","data":{"ticker":"GOOG"}}"#).unwrap();
        assert_eq!(data, json!({"ticker": "GOOG"}));
    }

    #[test]
    fn test_unwrapped_body_passes_through() {
        let body = json!({"requests_today": 12, "limit": 1000});
        assert_eq!(unwrap_envelope(body.clone()).unwrap(), body);

        let list = json!([1, 2, 3]);
        assert_eq!(unwrap_envelope(list.clone()).unwrap(), list);
    }

    #[test]
    fn test_null_data_is_returned_as_null() {
        assert_eq!(decode_body(r#"{"status":"ok","data":null}"#).unwrap(), Value::Null);
    }

    #[test]
    fn test_error_envelope() {
        let err = decode_body(r#"{"status":"error","error":{"message":"X"}}"#).unwrap_err();
        assert!(matches!(err, Error::Api { ref message } if message == "X"));

        let err = decode_body(r#"{"status":"error","data":{"a":1}}"#).unwrap_err();
        assert!(matches!(err, Error::Api { ref message } if message == "Unknown error"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(decode_body("<html>"), Err(Error::Json(_))));
    }

    #[test]
    fn test_into_record_rejects_missing_fields() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Record {
            ticker: String,
            spot_price: f64,
        }

        let err = into_record::<Record>(json!({"ticker": "GOOG"})).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
