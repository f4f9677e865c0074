mod cli;
mod config;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use summarize::{RetryPolicy, Summarizer};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::pipeline::Pipeline;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = cli.resolve_config()?;

    let summarizer = if cli.dry_run {
        tracing::info!("Dry run: LLM summarization disabled");
        None
    } else {
        let client = summarize::build_client(&config.llm)?;
        Some(
            Summarizer::new(client)
                .with_retry(RetryPolicy::from_config(&config.retry))
                .with_focus_context(config.focus.context.clone()),
        )
    };

    let output_root = config.output_root().to_path_buf();
    let stats = Pipeline::new(config, summarizer).run().await?;

    tracing::info!(
        files = stats.files,
        chunks = stats.chunks,
        failed_summaries = stats.failed_summaries,
        output = %output_root.display(),
        "All research papers processed"
    );

    Ok(())
}
