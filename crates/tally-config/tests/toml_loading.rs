//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use tally_config::{DEFAULT_BASE_URL, TallyConfig};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
api_key = "tly-from-toml"
base_url = "http://localhost:4010"
timeout_secs = 3
user_agent = "forms-sync/2.0"
page_size = 200
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.api_key, "tly-from-toml");
        assert_eq!(config.api.base_url, "http://localhost:4010");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.user_agent, "forms-sync/2.0");
        assert_eq!(config.api.page_size, 200);
        assert!(config.api.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\napi_key = \"tly-partial\"\n")?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.api_key, "tly-partial");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(
            ".tally/config.toml",
            "[api]\napi_key = \"tly-project\"\npage_size = 25\n",
        )?;

        let config: TallyConfig = TallyConfig::figment().extract()?;
        assert_eq!(config.api.api_key, "tly-project");
        assert_eq!(config.api.page_size, 25);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(".tally/config.toml", "[api]\napi_key = \"tly-project\"\n")?;
        jail.set_env("TALLY_API__API_KEY", "tly-env");

        let config = TallyConfig::load().expect("config loads");
        assert_eq!(config.api.api_key, "tly-env");
        Ok(())
    });
}

#[test]
fn malformed_toml_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(".tally/config.toml", "[api]\ntimeout_secs = \"soon\"\n")?;

        assert!(TallyConfig::load().is_err());
        Ok(())
    });
}
