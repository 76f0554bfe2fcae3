use std::env;

use anyhow::Context;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};
use youverify::{types::BankVerificationNumberRequest, Client, ClientConfig, Environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env()?;

    // JSON logs against the live API, human readable logs in the sandbox
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.environment.tracing_level()).into())
        .from_env_lossy();
    match config.environment {
        Environment::Production => fmt().json().with_env_filter(filter).init(),
        Environment::Sandbox => fmt().with_env_filter(filter).init(),
    }

    let bvn = env::args()
        .nth(1)
        .context("usage: youverify <bvn>")?;
    let premium = env::var("YOUVERIFY_PREMIUM_BVN")
        .map(|val| val.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    tracing::info!(environment = %config.environment, premium, "Looking up BVN");

    let client = Client::new(config)?;
    let response = client
        .kyc()
        .nigeria()
        .bank_verification_number(&BankVerificationNumberRequest::new(bvn).premium(premium))
        .await
        .context("BVN lookup failed")?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
