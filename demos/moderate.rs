use anyhow::Result;
use ic_messaging_client::{ClientConfig, MessagingClient};
use std::env;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ic_messaging_client=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <project> <message>", args[0]);
        eprintln!("Example: {} machu \"This is a rude message\"", args[0]);
        std::process::exit(1);
    }

    let project = &args[1];
    let content = &args[2];

    print!("Enter project key: ");
    io::stdout().flush()?;
    let key = rpassword::read_password()?;

    let mut client = MessagingClient::new(ClientConfig::from_env()?);
    client.initialize().await?;

    if !client.authorize(project, &key).await? {
        println!("Authorization failed for project {}", project);
        std::process::exit(1);
    }

    let level = client.harassment_level(content).await?;
    println!("Harassment level: {}", level);

    let improved = client.suggest_improved_message(content).await?;
    println!("Suggested message: {}", improved);

    Ok(())
}
