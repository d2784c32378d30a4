use rig_config::RigConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &RigConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &RigConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.catalog.is_configured() && has_env_prefix(&env_keys, "RIGFORGE_CATALOG") {
        warnings.push(
            "Catalog path is unset while RIGFORGE_CATALOG* env vars exist. Use double underscores (example: RIGFORGE_CATALOG__PATH)."
                .to_string(),
        );
    }

    if !config.share.is_configured() && has_env_prefix(&env_keys, "RIGFORGE_SHARE") {
        warnings.push(
            "Share base URL is the default while RIGFORGE_SHARE* env vars exist. Use double underscores (example: RIGFORGE_SHARE__BASE_URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
