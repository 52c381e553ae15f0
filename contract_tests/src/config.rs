//! Configuration contract tests
//!
//! These tests define the stable JSON shape of the namespace configuration.

// ===== Field Names =====
#[allow(dead_code)]
const CONFIG_FIELDS: [&str; 5] = [
    "separator",
    "main_drive",
    "zip_rounding",
    "log_level",
    "log_capacity",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{json_keys, verify_json_name};
    use core_types::EntityKind;
    use ns_model::ZipRounding;
    use services_logger::LogLevel;
    use services_namespace::{load_config_safe, NamespaceConfig};

    #[test]
    fn test_config_field_names() {
        let mut keys = json_keys(&NamespaceConfig::default());
        keys.sort();
        let mut expected: Vec<String> = CONFIG_FIELDS.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_config_defaults() {
        let config: NamespaceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.separator, '\\');
        assert_eq!(config.main_drive, "C:");
        assert_eq!(config.zip_rounding, ZipRounding::HalfToEven);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_capacity, 1024);
    }

    #[test]
    fn test_enum_names() {
        verify_json_name(&ZipRounding::HalfToEven, "half_to_even");
        verify_json_name(&ZipRounding::HalfUp, "half_up");
        verify_json_name(&LogLevel::Warn, "warn");
        verify_json_name(&EntityKind::ZipFile, "zip_file");
        verify_json_name(&EntityKind::TextFile, "text_file");

        for kind in EntityKind::ALL {
            verify_json_name(&kind, kind.as_str());
        }
    }

    #[test]
    fn test_config_round_trip() {
        let config = NamespaceConfig {
            separator: '/',
            main_drive: "root".to_string(),
            zip_rounding: ZipRounding::HalfUp,
            log_level: LogLevel::Debug,
            log_capacity: 16,
        };
        let bytes = config.to_json().unwrap();
        assert_eq!(NamespaceConfig::from_json(&bytes).unwrap(), config);
    }

    #[test]
    fn test_safe_load_falls_back() {
        assert_eq!(load_config_safe(b"not json"), NamespaceConfig::default());
        assert_eq!(
            load_config_safe(br#"{ "separator": " " }"#),
            NamespaceConfig::default()
        );
        assert_eq!(load_config_safe(br#"{ "log_capacity": 8 }"#).log_capacity, 8);
    }
}
