use anyhow::Context;
use arena_config::ArenaConfig;

/// Load configuration (`.env`, TOML files, `ARENA_*` env) and apply the
/// `--base-url` override on top.
pub fn load_config(base_url_override: Option<&str>) -> anyhow::Result<ArenaConfig> {
    let mut config = ArenaConfig::load_with_dotenv().context("failed to load arena configuration")?;

    if let Some(base_url) = base_url_override {
        config.api.base_url = base_url.trim().to_string();
        config
            .validate()
            .context("invalid --base-url")?;
    }

    Ok(config)
}
