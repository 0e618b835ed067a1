use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rosetta-translate")]
#[command(
    about = "Translates a text file from English to German using your chosen AI model via OpenRouter."
)]
#[command(version)]
pub struct Args {
    /// Input text file to translate
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output file for the translated text
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: PathBuf,

    /// Your OpenRouter API key. Overrides the .env file
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Suppress progress and status output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
