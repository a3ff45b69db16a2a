//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use arena_config::ArenaConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://arena.example.com"
timeout_secs = 30
user_agent = "arena-test/1.0"

[firebase]
api_key = "AIza-toml"
sign_in_page_url = "https://arena.example.com/cli-signin"
login_timeout_secs = 45

[general]
default_format = "raw"
"#,
        )?;

        let config: ArenaConfig = Figment::from(Serialized::defaults(ArenaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://arena.example.com");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(config.api.user_agent, "arena-test/1.0");
        assert_eq!(config.firebase.api_key, "AIza-toml");
        assert!(config.firebase.supports_google());
        assert_eq!(config.firebase.login_timeout_secs, 45);
        assert_eq!(
            config.firebase.identity_toolkit_url,
            "https://identitytoolkit.googleapis.com/v1"
        );
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}

#[test]
fn project_toml_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".arena")?;
        jail.create_file(
            ".arena/config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:8100"
"#,
        )?;

        let config = ArenaConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:8100");
        assert_eq!(config.api.user_agent, "arena-cli/0.1");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[firebase]
api_key = "AIza-only-key"
"#,
        )?;

        let config: ArenaConfig = Figment::from(Serialized::defaults(ArenaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://localhost:8002");
        assert_eq!(config.firebase.login_timeout_secs, 120);
        assert!(!config.firebase.supports_google());
        Ok(())
    });
}
