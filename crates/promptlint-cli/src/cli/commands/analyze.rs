use std::path::Path;

use promptlint_core::{AnalysisRequest, Analyzer, AnalyzerConfig};

use super::super::args::AnalyzeArgs;
use crate::{exit_codes, report};

pub fn run(args: AnalyzeArgs) -> anyhow::Result<i32> {
    // A path argument wins over literal text, matching the docs.
    let prompt_text = if Path::new(&args.prompt).exists() {
        std::fs::read_to_string(&args.prompt)?
    } else {
        args.prompt.clone()
    };

    let config = match AnalyzerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err.message);
            return Ok(exit_codes::for_error(&err));
        }
    };

    let mut request = AnalysisRequest::new(prompt_text);
    if let Some(model) = args.model {
        request = request.with_model(model);
    }

    let analyzer = Analyzer::from_config(config);
    eprintln!("Asking the judge model to audit your prompt...");
    match analyzer.analyze_blocking(&request) {
        Ok(result) => {
            if args.json_output {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                report::print_report(&result);
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            Ok(exit_codes::for_error(&err))
        }
    }
}
