//! # Namespace Contract Tests
//!
//! This crate provides "golden" tests for the namespace contracts to ensure
//! they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Contracts are written down as code
//! - **Testability first**: Contract tests fail when interfaces change
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! - `errors`: error display strings
//! - `config`: configuration JSON shape and defaults
//! - `sizes`: size rules that every tree must satisfy

pub mod config;
pub mod errors;
pub mod sizes;

/// Common test helpers for contract validation
pub mod test_helpers {
    use serde::Serialize;
    use serde_json::Value;

    /// Serializes `value` and returns the JSON object's keys in order
    pub fn json_keys<T: Serialize>(value: &T) -> Vec<String> {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => map.keys().cloned().collect(),
            Ok(other) => panic!("Expected a JSON object, got {}", other),
            Err(e) => panic!("Failed to serialize: {}", e),
        }
    }

    /// Verifies that `value` serializes to the JSON string `expected`
    pub fn verify_json_name<T: Serialize>(value: &T, expected: &str) {
        let json = serde_json::to_value(value).expect("Failed to serialize");
        assert_eq!(
            json,
            Value::String(expected.to_string()),
            "Serialized name changed: expected '{}', got {}",
            expected,
            json
        );
    }
}
