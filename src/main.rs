use std::time::Duration;

use anyhow::{bail, Context};
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use gitreceipt::receipt::{write_receipt_file, WriteMode};
use gitreceipt::{
    AggregatorConfig, Config, GitHubClient, ProfileAggregator, Receipt, ReceiptPresenter,
    TriggerOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "gitreceipt")]
#[command(version = "0.1.0")]
#[command(about = "Print a receipt-style summary of a GitHub profile")]
struct Args {
    /// GitHub username to summarize
    #[arg(short, long)]
    username: Option<String>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout); interactive mode appends each receipt
    #[arg(short, long)]
    output: Option<String>,

    /// Seed for the decorative order/coupon/auth codes
    #[arg(long)]
    seed: Option<u64>,

    /// Read usernames from stdin, one receipt per line
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitreceipt=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    if !matches!(args.format.as_str(), "text" | "markdown" | "json") {
        bail!("unknown format {:?}, expected text, markdown or json", args.format);
    }

    let config = Config::from_env()?;
    let github = GitHubClient::new(&config)?;
    let aggregator = ProfileAggregator::new(github, AggregatorConfig::from(&config));
    let presenter = ReceiptPresenter::new(aggregator);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.interactive {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            presenter.set_input(line).await;
            if run_generation(&presenter).await? == TriggerOutcome::Completed {
                if let Some(receipt) = presenter.render(&mut rng, Local::now()).await {
                    output_receipt(&receipt, &args)?;
                }
            }
        }
        return Ok(());
    }

    let Some(username) = args.username.clone() else {
        bail!("--username is required unless --interactive is set");
    };

    presenter.set_input(username.as_str()).await;
    match run_generation(&presenter).await? {
        TriggerOutcome::Completed => {}
        TriggerOutcome::Skipped => bail!("username must not be empty"),
        _ => bail!("could not generate a receipt for {}", username),
    }

    let receipt = presenter
        .render(&mut rng, Local::now())
        .await
        .context("no result to render")?;
    output_receipt(&receipt, &args)?;

    Ok(())
}

async fn run_generation(presenter: &ReceiptPresenter) -> anyhow::Result<TriggerOutcome> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Generating receipt for {}", presenter.input().await.trim()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = presenter.generate().await;
    spinner.finish_and_clear();

    Ok(outcome)
}

fn output_receipt(receipt: &Receipt, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => receipt.to_json()?,
        "markdown" => receipt.format_markdown(),
        _ => receipt.format_text(),
    };

    if let Some(ref path) = args.output {
        // Interactive sessions collect every receipt in the one file.
        let mode = if args.interactive {
            WriteMode::Append
        } else {
            WriteMode::Replace
        };
        write_receipt_file(path, &output, mode)?;
        tracing::info!("Receipt written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
