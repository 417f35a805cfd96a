use color_eyre::Result;

use mentalmuse::cli::{parse_args, run_cli_command};
use mentalmuse::config::AppConfig;
use mentalmuse::{logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let config = AppConfig::from_env();
    let command = parse_args(std::env::args());

    match run_cli_command(command, &config).await {
        Some(Ok(())) => Ok(()),
        Some(Err(e)) => {
            tracing::debug!(code = e.error_code(), category = %e.category(), error = %e, "command failed");
            eprintln!("Error: {}", e.user_message());
            eprintln!("{}", e.recovery_hint());
            std::process::exit(1);
        }
        None => server::run(&config).await,
    }
}
