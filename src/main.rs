use clap::Parser;
use std::process::ExitCode;

use rosetta_translate::cli::Args;
use rosetta_translate::cli::commands::translate;
use rosetta_translate::output::{self, OutputConfig};
use rosetta_translate::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures; usage errors are
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let options = translate::TranslateOptions {
        input: args.input,
        output: args.output,
        api_key: args.api_key,
        base_url: args.base_url,
    };

    match translate::run_translate(options).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            rosetta_translate::warn!("\n{} {err:#}", Style::error("Error:"));
            ExitCode::FAILURE
        }
    }
}
