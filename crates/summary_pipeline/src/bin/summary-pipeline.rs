use std::{io::Read, path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use summary_history::{HistoryLedger, ModelProfile};
use summary_pipeline::{
    export::export_summary, tracing::init_tracing_subscriber, types::SummaryRequest,
    HfInferenceClient, SummaryPipelineBuilder,
};

#[derive(Parser)]
#[command(name = "summary-pipeline", about = "Text summarization pipeline")]
struct Cli {
    /// Hugging Face Inference API token
    #[arg(long, env = "HF_API_TOKEN")]
    hf_token: String,

    /// Input text file; reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Summarization model profile
    #[arg(long, value_enum, default_value_t = ProfileArg::Primary)]
    profile: ProfileArg,

    /// Target summary length in words
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(u32).range(30..=150))]
    target_length: u32,

    /// Keep redundant sentences instead of deduplicating them
    #[arg(long)]
    keep_redundancy: bool,

    /// Engine call timeout in seconds
    #[arg(long, default_value = "60")]
    timeout_secs: u64,

    /// Directory to export the summary into as summary.txt
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// BART, quality-oriented
    Primary,
    /// T5-small, speed-oriented
    Fast,
}

impl From<ProfileArg> for ModelProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Primary => ModelProfile::Primary,
            ProfileArg::Fast => ModelProfile::Fast,
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let raw_text = read_input(cli.input.as_ref())?;

    let token = cli.hf_token.clone();
    let pipeline = SummaryPipelineBuilder::new()
        .engine_factory(move |profile| HfInferenceClient::new(token.clone(), profile))
        .engine_timeout(Duration::from_secs(cli.timeout_secs))
        .build();

    // session-scoped history, one per process for the CLI
    let mut ledger = HistoryLedger::new();

    let request = SummaryRequest {
        raw_text,
        model_profile: cli.profile.into(),
        target_length: cli.target_length,
        remove_redundancy: !cli.keep_redundancy,
    };

    let result = pipeline.run(&request, &mut ledger).await?;

    println!("{}", result.summary_text);
    println!();
    println!("Original words:    {}", result.metrics.original_word_count);
    println!("Summary words:     {}", result.metrics.summary_word_count);
    println!("Compression ratio: {:.1}x", result.metrics.compression_ratio);
    println!(
        "Processing time:   {:.2} seconds",
        result.metrics.processing_time_seconds
    );

    if let Some(dir) = cli.export_dir {
        let path = export_summary(&result.summary_text, &dir)?;
        println!("Summary exported to {}", path.display());
    }

    Ok(())
}
