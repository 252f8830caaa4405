use attest_config::AttestConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &AttestConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AttestConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.session.is_configured() && has_mistyped_key(&env_keys, "ATTEST_SESSION") {
        warnings.push(
            "Session organization appears default while ATTEST_SESSION* env vars exist. Use double underscores (example: ATTEST_SESSION__ORGANIZATION)."
                .to_string(),
        );
    }

    if config.store.log_dir == AttestConfig::default().store.log_dir
        && has_mistyped_key(&env_keys, "ATTEST_STORE")
    {
        warnings.push(
            "Log directory appears default while ATTEST_STORE* env vars exist. Use double underscores (example: ATTEST_STORE__LOG_DIR)."
                .to_string(),
        );
    }

    warnings
}

/// A key under `prefix` that is not followed by the `__` section separator.
fn has_mistyped_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with("__"))
    })
}
