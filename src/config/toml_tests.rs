//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.adapter.include.is_empty());
        assert!(config.adapter.exclude.is_empty());
        assert!(!config.adapter.exclude_virtual);
        assert_eq!(config.toggle.settle_delay_ms, None);
        assert_eq!(config.toggle.notify_timeout_ms, None);
        assert_eq!(config.toggle.flush_cache, None);
    }

    #[test]
    fn full_document() {
        let config = TomlConfig::parse(
            r#"
            [adapter]
            include = ["^Ethernet"]
            exclude = ["vEthernet", "VirtualBox"]
            exclude_virtual = true

            [toggle]
            settle_delay_ms = 1000
            notify_timeout_ms = 2000
            flush_cache = false
            "#,
        )
        .unwrap();

        assert_eq!(config.adapter.include, vec!["^Ethernet"]);
        assert_eq!(config.adapter.exclude, vec!["vEthernet", "VirtualBox"]);
        assert!(config.adapter.exclude_virtual);
        assert_eq!(config.toggle.settle_delay_ms, Some(1000));
        assert_eq!(config.toggle.notify_timeout_ms, Some(2000));
        assert_eq!(config.toggle.flush_cache, Some(false));
    }

    #[test]
    fn partial_section() {
        let config = TomlConfig::parse("[toggle]\nflush_cache = true\n").unwrap();

        assert_eq!(config.toggle.flush_cache, Some(true));
        assert_eq!(config.toggle.settle_delay_ms, None);
    }
}

mod rejected_input {
    use super::*;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[resolvers]\nprimary = \"1.1.1.1\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[toggle]\nresolvers = [\"1.1.1.1\"]\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[toggle]\nsettle_delay_ms = \"fast\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn negative_delay_is_rejected() {
        let result = TomlConfig::parse("[toggle]\nsettle_delay_ms = -1\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = TomlConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::FileRead { path: p, .. }) if p == path));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        // Everything in the template is commented out
        assert!(config.adapter.include.is_empty());
        assert_eq!(config.toggle.settle_delay_ms, None);
    }

    #[test]
    fn template_mentions_every_setting() {
        let template = default_config_template();

        for key in [
            "include",
            "exclude",
            "exclude_virtual",
            "settle_delay_ms",
            "notify_timeout_ms",
            "flush_cache",
        ] {
            assert!(template.contains(key), "template is missing {key}");
        }
    }
}
