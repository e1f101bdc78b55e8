use clap::{Parser, Subcommand};
use std::path::PathBuf;
use travel_refinery::config::PipelineConfig;
use travel_refinery::ops::{self, LogFormat};
use travel_refinery::pipeline;

#[derive(Parser)]
#[command(name = "travel-refinery", about = "Scrape, clean and LLM-format destination travel content")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Raw scraped records file
    #[arg(long, global = true)]
    raw: Option<PathBuf>,

    /// Cleaned document file
    #[arg(long, global = true)]
    clean: Option<PathBuf>,

    /// Final formatted document file
    #[arg(long = "final", global = true)]
    final_output: Option<PathBuf>,

    /// Schema template file
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// LLM model name
    #[arg(long, global = true)]
    model: Option<String>,

    /// Do not echo streamed LLM output to stdout
    #[arg(long, global = true)]
    quiet: bool,

    /// Human-readable logs instead of JSON
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Scrape, clean and format (default)
    Run,
    /// Clean and format an existing raw file
    Resume,
    /// Only harvest the source pages
    Scrape,
    /// Only clean the raw records
    Clean,
    /// Only run the LLM formatter on the cleaned document
    Format,
    /// Check that the LLM endpoint answers
    Probe,
}

impl Cli {
    // * Environment override is applied once by from_env, CLI flags on top
    fn into_config(self) -> (Command, PipelineConfig) {
        let mut config = PipelineConfig::from_env();

        if let Some(path) = self.raw {
            config.paths.raw = path;
        }
        if let Some(path) = self.clean {
            config.paths.clean = path;
        }
        if let Some(path) = self.final_output {
            config.paths.final_output = path;
        }
        if let Some(path) = self.template {
            config.paths.template = path;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        config.llm.echo_stream = !self.quiet;

        (self.command.unwrap_or(Command::Run), config)
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let format = if cli.pretty { LogFormat::Pretty } else { LogFormat::Json };
    ops::init_tracing_with_level("travel_refinery=debug,info", format);

    let (command, config) = cli.into_config();

    let outcome = match command {
        Command::Run => pipeline::run_all(&config).await.map(|_| ()),
        Command::Resume => pipeline::run_from_raw(&config).await.map(|_| ()),
        Command::Scrape => pipeline::run_scrape(&config).await,
        Command::Clean => pipeline::run_clean(&config).map(|_| ()),
        Command::Format => pipeline::run_format(&config).await.map(|_| ()),
        Command::Probe => ops::probe(&config.llm).await.map(|_| ()).map_err(Into::into),
    };

    if let Err(e) = outcome {
        tracing::error!(error = %e, "Pipeline stopped");
        std::process::exit(1);
    }
}
