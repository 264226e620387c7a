//! Conversions between catalog records and store rows.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::store::StoreError;

/// Decode one row.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] when the row does not match `T`.
pub fn decode<T: DeserializeOwned>(row: Value) -> Result<T, StoreError> {
    serde_json::from_value(row).map_err(StoreError::Decode)
}

/// Decode every row, failing on the first bad one.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] when a row does not match `T`.
pub fn decode_all<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, StoreError> {
    rows.into_iter().map(decode).collect()
}

/// Decode the first row of an update result.
///
/// # Errors
///
/// Returns [`StoreError::Empty`] when nothing matched.
pub fn decode_first<T: DeserializeOwned>(rows: Vec<Value>) -> Result<T, StoreError> {
    rows.into_iter().next().ok_or(StoreError::Empty).and_then(decode)
}

/// Encode a record as a row.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] when serialisation fails.
pub fn encode<T: Serialize>(record: &T) -> Result<Value, StoreError> {
    serde_json::to_value(record).map_err(StoreError::Encode)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        key: String,
    }

    #[test]
    fn decode_first_of_nothing_is_empty() {
        let result = decode_first::<Row>(Vec::new());

        assert!(
            matches!(result, Err(StoreError::Empty)),
            "expected Empty, got {result:?}"
        );
    }

    #[test]
    fn decode_all_reports_bad_rows() -> TestResult {
        let good = decode_all::<Row>(vec![json!({"key": "a"})])?;
        let bad = decode_all::<Row>(vec![json!({"key": "a"}), json!({"nope": 1})]);

        assert_eq!(good, vec![Row { key: "a".to_string() }]);
        assert!(matches!(bad, Err(StoreError::Decode(_))), "expected Decode, got {bad:?}");

        Ok(())
    }
}
