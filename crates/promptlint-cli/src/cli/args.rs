use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "promptlint",
    version,
    about = "Audit LLM prompts against the 10 golden rules of prompting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Audit a prompt given as literal text or a file path
    Analyze(AnalyzeArgs),
    /// Start the HTTP API server
    Serve(ServeArgs),
    Version,
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// The prompt text to audit, or a path to a file containing it
    pub prompt: String,

    /// Judge model override (default: gemini-2.0-flash)
    #[arg(long)]
    pub model: Option<String>,

    /// Print the raw analysis JSON instead of the console report
    #[arg(long)]
    pub json_output: bool,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,
}
