use anyhow::Result;
use ic_messaging_client::{ClientConfig, MessagingClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ic_messaging_client=info")),
        )
        .init();

    let mut client = MessagingClient::new(ClientConfig::from_env()?);
    client.initialize().await?;

    let status = client.get_canister_status().await?;
    println!("Canister: {}", client.canister_id());
    println!(
        "Replica health: {}",
        status.replica_health_status.as_deref().unwrap_or("unknown")
    );
    if let Some(version) = &status.impl_version {
        println!("Implementation version: {}", version);
    }

    Ok(())
}
