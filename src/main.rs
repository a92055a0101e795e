//! mangarn command line interface.
//!
//! Packages the page files of the current directory into CBZ archives under
//! `./output`. Takes no arguments; set `RUST_LOG` to change log verbosity.

use std::process::ExitCode;

use log::error;
use mangarn::MangarnConfig;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match MangarnConfig::builder().build() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match config.convert().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
