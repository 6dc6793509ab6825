// Gemchat - terminal chat client for Gemini
// Main entry point

use anyhow::Result;
use clap::Parser;

use gemchat::cli::Repl;
use gemchat::config::{load_config, Config};
use gemchat::provider::GeminiClient;
use gemchat::session::{Strategy, TurnProcessor};

#[derive(Parser)]
#[command(name = "gemchat", version, about = "Gemini chat with prompt-engineering controls")]
struct Args {
    /// Gemini API key (overrides config file and GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Model to use
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature (0.0-1.0)
    #[arg(long)]
    temperature: Option<f32>,

    /// Nucleus sampling cutoff (0.0-1.0)
    #[arg(long)]
    top_p: Option<f32>,

    /// Maximum output tokens (100-2048)
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Prompting strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Load configuration; a key on the command line is enough to start
    // without a config file.
    let mut config = match load_config() {
        Ok(config) => config,
        Err(e) => match &args.api_key {
            Some(api_key) => Config::new(api_key.clone()),
            None => return Err(e),
        },
    };

    // Apply command-line overrides
    if let Some(api_key) = args.api_key {
        config.api_key = api_key;
    }
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(temperature) = args.temperature {
        config.temperature = temperature;
    }
    if let Some(top_p) = args.top_p {
        config.top_p = top_p;
    }
    if let Some(max_tokens) = args.max_tokens {
        config.max_tokens = max_tokens;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }

    config.validate()?;

    // Create the Gemini client and turn processor
    let client = GeminiClient::new(config.api_key.clone())?.with_model(config.model.clone());
    let processor = TurnProcessor::new(Box::new(client));

    // Create and run the chat loop
    let mut repl = Repl::new(config, processor);

    repl.run().await?;

    Ok(())
}
