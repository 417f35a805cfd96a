//! Command-line front end.
//!
//! `main` parses the arguments, lets [`run_cli_command`] handle everything
//! except `serve`, and starts the API server itself when it gets `None` back:
//!
//! ```ignore
//! use mentalmuse::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! match run_cli_command(command, &config).await {
//!     Some(result) => result?,
//!     None => mentalmuse::server::run(&config).await?,
//! }
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand, FeedTarget};
pub use commands::CliContext;
pub use version::VERSION;

use std::io::{self, BufReader};

use crate::config::AppConfig;
use crate::error::{MuseError, MuseResult};

/// Run a CLI command against stdin/stdout.
///
/// # Returns
///
/// * `None` - for `Serve`; the caller runs the server
/// * `Some(Ok(()))` - the command completed
/// * `Some(Err(e))` - the command failed
pub async fn run_cli_command(command: CliCommand, config: &AppConfig) -> Option<MuseResult<()>> {
    match command {
        CliCommand::Serve => None,
        CliCommand::Version => {
            println!("{}", version::version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", version::help_text());
            Some(Ok(()))
        }
        CliCommand::Invalid(reason) => {
            eprintln!("{}", args::USAGE);
            Some(Err(MuseError::validation("arguments", reason)))
        }
        command => {
            let context = CliContext::open(config.clone(), BufReader::new(io::stdin()), io::stdout());
            Some(match context {
                Ok(mut context) => context.execute(command).await,
                Err(e) => Err(e),
            })
        }
    }
}
