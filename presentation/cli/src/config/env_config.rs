use business::domain::environment::EnvSnapshot;
use dotenvy::dotenv;

/// Load `.env` (if present) into the process environment and snapshot it.
///
/// Variables already set in the process take precedence over `.env`.
/// Entries whose key or value is not valid UTF-8 are skipped.
pub fn load_env() -> EnvSnapshot {
    dotenv().ok();

    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
