use anyhow::{Context, Result};
use clap::Parser;
use infinityhub::cli::{Cli, Commands};
use infinityhub::server::HttpServer;
use infinityhub::{api, utils, App, Settings};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::new().context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level)),
        )
        .init();

    let cli = Cli::parse();
    let app = App::init(settings);

    match cli.command {
        Commands::Serve { host, port } => HttpServer::new(&app).with_address(host, port).run().await,
        Commands::Chat { prompt, category } => handle_chat(&app, prompt, category).await,
        Commands::Ideas { topic } => handle_ideas(&app, topic).await,
        Commands::Batch { file, concurrency } => handle_batch(&app, file, concurrency).await,
    }
}

async fn handle_chat(app: &App, prompt: String, category: Option<String>) -> Result<()> {
    if !app.assistant.is_ready() {
        utils::print_info("AI provider not configured, replying with local fallback");
    }

    let record = app
        .assistant
        .submit_chat(&prompt, category.as_deref())
        .await?;

    utils::print_record(&record);
    Ok(())
}

async fn handle_ideas(app: &App, topic: String) -> Result<()> {
    utils::print_header(&format!("Ideas for \"{}\"", topic));

    for (i, idea) in app.assistant.content_ideas(&topic).await.iter().enumerate() {
        println!("{:>2}. {}", i + 1, idea);
    }
    Ok(())
}

async fn handle_batch(app: &App, file: String, concurrency: usize) -> Result<()> {
    utils::print_info(&format!(
        "Submitting prompts from {} with concurrency {}",
        file, concurrency
    ));

    let file = File::open(&file)
        .await
        .with_context(|| format!("Failed to open {}", file))?;
    let mut lines = BufReader::new(file).lines();

    let mut prompts = vec![];
    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            prompts.push(line);
        }
    }

    let results = api::batch::submit_prompts(&app.assistant, prompts, concurrency).await;

    let failures = results.iter().filter(|r| r.is_err()).count();
    for error in results.iter().filter_map(|r| r.as_ref().err()) {
        utils::print_error(&format!("Submission failed: {}", error));
    }

    utils::print_header("Chat history");
    for record in app.assistant.chat_history().await? {
        utils::print_record(&record);
    }

    let logged = app.assistant.history_len().await?;
    if failures == 0 {
        utils::print_success(&format!(
            "{} prompts submitted, {} records in history",
            results.len(),
            logged
        ));
    } else {
        utils::print_error(&format!(
            "{} of {} prompts failed, {} records in history",
            failures,
            results.len(),
            logged
        ));
    }
    Ok(())
}
