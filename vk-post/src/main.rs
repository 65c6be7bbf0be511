//! vk-post - Post a message to one or more VK walls

use clap::error::ErrorKind;
use clap::Parser;
use libvkpost::platforms::vk::VkClient;
use libvkpost::poster::BatchPoster;
use libvkpost::{AccountSelection, Config, PostRequest, PostResult, Result, VkPostError};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "vk-post", version)]
#[command(about = "Post a message to VK walls", long_about = None)]
struct Cli {
    /// VK access token with the `wall` permission
    #[arg(long, env = "VK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// User ID, or negative community ID, to post on
    #[arg(long, allow_negative_numbers = true)]
    owner_id: Option<i64>,

    /// Community ID to post on with --token (repeatable)
    #[arg(long = "group", value_name = "ID", allow_negative_numbers = true)]
    groups: Vec<i64>,

    /// Explicit account as <token>:<owner_id> (repeatable, takes precedence)
    #[arg(
        long = "account",
        value_name = "TOKEN:OWNER_ID",
        allow_hyphen_values = true
    )]
    accounts: Vec<String>,

    /// Text of the post
    #[arg(long, allow_hyphen_values = true)]
    message: String,

    /// Comma-separated attachments in VK format (e.g. photo123_456)
    #[arg(long)]
    attachments: Option<String>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Configuration file (defaults to VKPOST_CONFIG or ~/.config/vkpost/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(VkPostError::InvalidInput(format!(
            "Invalid format '{}'. Valid options: text, json",
            other
        ))),
    }
}

fn print_result(result: &PostResult, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", result),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "owner_id": result.owner_id,
                "post_id": result.post_id,
            })
        ),
    }
}

#[tokio::main]
async fn main() {
    // Usage errors exit 3 like every other input problem; 2 is reserved for auth failures
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(3);
            }
        },
    };

    libvkpost::logging::init_from_env(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = parse_format(&cli.format)?;

    let selection = AccountSelection {
        token: cli.token,
        owner_id: cli.owner_id,
        groups: cli.groups,
        accounts: cli.accounts,
    };
    let accounts = selection.resolve()?;
    let request = PostRequest::new(cli.message, cli.attachments)?;

    let config = Config::load(cli.config.as_deref())?;
    debug!(
        accounts = accounts.len(),
        endpoint = %config.api.endpoint,
        version = %config.api.version,
        "Starting batch"
    );

    let batch = BatchPoster::new(Box::new(VkClient::new(&config.api)?));
    batch
        .run(&accounts, &request, |result| print_result(result, format))
        .await?;

    Ok(())
}
