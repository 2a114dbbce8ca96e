use anyhow::Context as _;
use clap::Parser;
use pr_event_action::{client, event, payload::WebhookContext};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Token provided through the `repo-token` action input.
    #[arg(long, env = "INPUT_REPO_TOKEN", hide_env_values = true)]
    repo_token: String,

    /// Name of the webhook event that triggered the workflow.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: String,

    /// Path of the JSON file holding the event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Err(error) = run(args).await {
        // Fail the workflow step if an error occurs
        println!("::error::{error:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let _client = client::github_client(&args.repo_token)?;

    let raw = tokio::fs::read_to_string(&args.event_path)
        .await
        .with_context(|| {
            format!(
                "failed to read event payload at {}",
                args.event_path.display()
            )
        })?;
    let context: WebhookContext =
        serde_json::from_str(&raw).context("failed to parse event payload")?;

    info!("Received {} event", args.event_name);

    match args.event_name.as_str() {
        "pull_request" if context.is_opened_pull_request() => {
            let record = event::pull_request_opened_event(&context)?;
            info!("The event payload: {}", serde_json::to_string(&record)?);
        }
        "pull_request" => {
            info!("Ignoring pull_request action: {:?}", context.action);
        }
        other => {
            info!("Unhandled event type: {}", other);
        }
    }

    Ok(())
}
