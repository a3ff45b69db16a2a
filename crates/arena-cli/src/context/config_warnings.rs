use arena_config::ArenaConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ArenaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ArenaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.firebase.is_configured() && has_single_underscore_key(&env_keys, "ARENA_FIREBASE") {
        warnings.push(
            "Firebase config appears default while ARENA_FIREBASE_* env vars exist. Use double underscores (example: ARENA_FIREBASE__API_KEY)."
                .to_string(),
        );
    }

    if config.api.base_url == "http://localhost:8002" && has_single_underscore_key(&env_keys, "ARENA_API") {
        warnings.push(
            "API base URL appears default while ARENA_API_* env vars exist. Use double underscores (example: ARENA_API__BASE_URL)."
                .to_string(),
        );
    }

    warnings
}

/// `ARENA_FIREBASE_API_KEY` (single underscore) instead of `ARENA_FIREBASE__API_KEY`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
