// ABOUTME: Integration tests for fleet settings and configuration blobs.
// ABOUTME: Tests YAML parsing, discovery, validation and the advert rewrite on real files.

use fleetctl::config::*;
use fleetctl::error::Error;
use serde_json::Value;
use std::fs;
use std::time::Duration;

mod settings {
    use super::*;

    #[test]
    fn parse_full_settings() {
        let yaml = r#"
ip_address: 10.0.0.5
start_port: 24000
end_port: 24011
fleet_size: 4
credentials_file: secrets/cookies.txt
config_dir: blobs
idle_config: idle.json
advert_template: advert.json
rooms_file: rooms.json
advert_window: 10s
request_timeout: 3s
interrupt_grace: 500ms
max_parallel: 16
"#;
        let config = FleetConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.ip_address, "10.0.0.5");
        assert_eq!(config.total_fleets(), 3);
        assert_eq!(config.advert_window, Duration::from_secs(10));
        assert_eq!(config.interrupt_grace, Duration::from_millis(500));
        assert_eq!(config.max_parallel, Some(16));
        assert_eq!(
            config.idle_config_path(),
            std::path::Path::new("blobs").join("idle.json")
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = FleetConfig::from_yaml("fleet_size: 6\n").unwrap();
        assert_eq!(config.start_port, 23330);
        assert_eq!(config.fleet_size, 6);
        assert_eq!(config.advert_window, Duration::from_secs(5));
        assert!(config.has_partial_fleet());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(FleetConfig::from_yaml("fleetsize: 6\n").is_err());
    }

    #[test]
    fn inverted_port_range_is_invalid() {
        let err = FleetConfig::from_yaml("start_port: 200\nend_port: 100\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn zero_fleet_size_is_invalid() {
        let err = FleetConfig::from_yaml("fleet_size: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn discover_prefers_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "fleet_size: 2\n").unwrap();
        let config = FleetConfig::discover(dir.path()).unwrap();
        assert_eq!(config.fleet_size, 2);
    }

    #[test]
    fn discover_finds_dot_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".fleetctl")).unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME_DIR), "end_port: 23337\n").unwrap();
        let config = FleetConfig::discover(dir.path()).unwrap();
        assert_eq!(config.total_fleets(), 1);
    }

    #[test]
    fn discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FleetConfig::discover(dir.path()).unwrap();
        assert_eq!(config.total_fleets(), 3);
    }

    #[test]
    fn explicit_missing_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FleetConfig::load(&dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, Error::SettingsNotFound(_)));
    }
}

mod blobs {
    use super::*;

    const TEMPLATE: &str = r#"{
    "room": {"danmaku": true, "gift": false},
    "advert": {"adverts": "old text", "is_open": true, "interval": 30},
    "volume": 0.8
}"#;

    #[test]
    fn disabling_advert_only_touches_advert_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set-custom-ad-template.json");
        fs::write(&path, TEMPLATE).unwrap();

        let original = ConfigBlob::load(&path).unwrap();
        let disabled = original.with_advert("", false);

        assert_eq!(disabled.value()["advert"]["is_open"], false);
        assert_eq!(disabled.value()["advert"]["adverts"], "");

        let mut expected: Value = original.value().clone();
        expected["advert"]["is_open"] = Value::Bool(false);
        expected["advert"]["adverts"] = Value::String(String::new());
        assert_eq!(disabled.value(), &expected);
    }

    #[test]
    fn wire_form_is_compact_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("live.json");
        fs::write(&path, TEMPLATE).unwrap();

        let wire = ConfigBlob::load(&path).unwrap().to_wire().unwrap();
        assert!(!wire.contains('\n'));
        assert!(wire.starts_with(r#"{"room":"#));
    }

    #[test]
    fn malformed_blob_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = ConfigBlob::load(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedBlob { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_blob_is_config_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigBlob::load(&dir.path().join("idle.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigFileNotFound(_)));
    }

    #[test]
    fn resolve_falls_back_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("live.json"), "{}").unwrap();

        let resolved = resolve_config_path("live.json", dir.path()).unwrap();
        assert_eq!(resolved, dir.path().join("live.json"));

        let err = resolve_config_path("missing.json", dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigFileNotFound(_)));
    }

    #[test]
    fn listing_only_returns_json_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = list_config_files(dir.path()).unwrap();
        assert_eq!(files, vec!["a.json".to_string(), "b.json".to_string()]);
    }
}
