use tracing::info_span;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use fbwire::{Config, Result};

mod params;
mod describe;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::Registry::default()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env();
    tracing::info!(
        addr = %config.addr(),
        database = config.database(),
        protocol = %config.protocol(),
        "config"
    );

    info_span!("params").in_scope(|| params::main(&config));
    info_span!("describe").in_scope(describe::main)?;

    Ok(())
}

/// Space separated hex bytes.
pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
