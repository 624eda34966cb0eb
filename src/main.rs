use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Set to e.g. `debug` to see what the dispatcher is doing (on stderr).
const LOG_ENV: &str = "TOML_ALIAS_LOG";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    toml_alias::run()
}
