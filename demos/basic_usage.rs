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
    if args.len() < 4 {
        eprintln!("Usage: {} <project> <sender> <receiver> [message]", args[0]);
        eprintln!(
            "Example: {} machu elsnu-exgt6-a6c4w-zvlfc-3oqrj-5ifj3-adiil-cagsu-sdtml-yeed7-mae xraya-wv56e-7ddrm-fwhih-wx6er-3tiru-agv3f-efbkp-uwqbn-od643-rae \"Hello, how are you?\"",
            args[0]
        );
        std::process::exit(1);
    }

    let project = &args[1];
    let sender = &args[2];
    let receiver = &args[3];
    let content = args
        .get(4)
        .map(String::as_str)
        .unwrap_or("Hello from ic-messaging-client!");

    print!("Enter project key: ");
    io::stdout().flush()?;
    let key = rpassword::read_password()?;

    let config = ClientConfig::from_env()?;
    println!("Connecting to canister {} at {}...", config.canister_id, config.host);
    let mut client = MessagingClient::new(config);
    client.initialize().await?;
    println!("Initialized successfully!");

    if !client.authorize(project, &key).await? {
        println!("Authorization failed for project {}", project);
        std::process::exit(1);
    }
    println!("Authorized for project {}", project);

    println!("\nSending message...");
    let sent = client.send_message(sender, receiver, content).await?;
    println!("Message sent: {}", sent);

    println!("\nFetching messages for {}...", receiver);
    let messages = client.receive_messages(receiver).await?;
    println!("Found {} messages:", messages.len());

    for msg in messages {
        println!(
            "\n[{}] {} -> {}: {}",
            chrono::DateTime::from_timestamp_nanos(msg.timestamp).format("%Y-%m-%d %H:%M:%S"),
            short(&msg.sender),
            short(&msg.receiver),
            msg.content
        );
    }

    Ok(())
}

fn short(principal: &str) -> String {
    principal.chars().take(8).collect()
}
