use std::net::SocketAddr;

use promptlint_api::AppState;
use promptlint_core::{Analyzer, AnalyzerConfig};

use super::super::args::ServeArgs;
use crate::exit_codes;

pub fn run(args: ServeArgs) -> anyhow::Result<i32> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match AnalyzerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err.message);
            return Ok(exit_codes::for_error(&err));
        }
    };

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let analyzer = Analyzer::from_config(config);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    rt.block_on(promptlint_api::serve(addr, AppState::new(analyzer)))?;
    Ok(exit_codes::SUCCESS)
}
