use clap::Parser;
use script_invoker::utils::{logger, validation::Validate};
use script_invoker::{CliConfig, RequestInvoker, ScriptRunner};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting script-invoker");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let runner = ScriptRunner::new(RequestInvoker::new(config));
    let mut stdout = std::io::stdout();

    if let Err(e) = runner.run(&mut stdout).await {
        tracing::error!("❌ Request failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
