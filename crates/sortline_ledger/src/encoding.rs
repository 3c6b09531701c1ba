//! Canonical encoding for reproducible traces.
//!
//! Uses JSON through serde_json. Struct fields serialize in declaration
//! order and highlight maps are ordered, so equal values always produce
//! equal bytes.

use crate::ledger::StepLedger;
use crate::step::Step;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sortline_core::CoreResult;

/// Trait for canonical serialization
pub trait CanonicalEncode: Serialize {
    /// Encode to canonical bytes
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be represented as JSON
    fn encode(&self) -> CoreResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Encode to indented JSON for files meant to be read by people
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be represented as JSON
    fn encode_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// Types opt in explicitly; there is no blanket impl.
impl<V: Serialize> CanonicalEncode for Step<V> {}
impl<V: Serialize> CanonicalEncode for StepLedger<V> {}

/// Trait for canonical deserialization
pub trait CanonicalDecode: DeserializeOwned {
    /// Decode from canonical bytes
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidEncoding` on malformed input
    fn decode(data: &[u8]) -> CoreResult<Self> {
        Ok(serde_json::from_slice(data)?)
    }
}

impl<T: DeserializeOwned> CanonicalDecode for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Highlights;
    use sortline_core::CoreError;

    fn sample_ledger() -> StepLedger<i64> {
        let mut ledger = StepLedger::new();
        ledger.push(Step::new(&[3, 1], "Start", Highlights::none()));
        ledger.push(Step::new(&[3, 1], "Comparing 3 and 1", Highlights::none().comparing([0, 1])));
        ledger.push(Step::new(&[1, 3], "Swapped 1 and 3", Highlights::none().swapping([0, 1])));
        ledger
    }

    #[test]
    fn test_ledger_encode_decode() {
        let ledger = sample_ledger();
        let bytes = ledger.encode().unwrap();
        let decoded = StepLedger::<i64>::decode(&bytes).unwrap();
        assert_eq!(decoded, ledger);
    }

    #[test]
    fn test_encode_deterministic() {
        let a = sample_ledger().encode().unwrap();
        let b = sample_ledger().encode().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_decode() {
        let result = StepLedger::<i64>::decode(b"{not json");
        assert!(matches!(result, Err(CoreError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_encode_pretty_is_readable() {
        let text = sample_ledger().encode_pretty().unwrap();
        assert!(text.contains("\"explanation\": \"Swapped 1 and 3\""));
    }
}
