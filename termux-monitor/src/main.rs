mod config;
mod error;
mod forward;
mod interpreter;
mod language;
mod messages;

use std::env;
use std::ffi::OsString;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::config::{LOG_ENV, LauncherConfig};
use crate::error::LaunchError;
use crate::messages::Messages;

fn main() {
    init_logging();

    let config = LauncherConfig::from_env();
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match launch(&config, args) {
        Ok(code) => exit(code),
        Err(e) => {
            tracing::debug!(error = ?e, "launch failed");
            report(&config, &e);
            exit(1);
        }
    }
}

fn launch(config: &LauncherConfig, args: Vec<OsString>) -> Result<i32, LaunchError> {
    let interpreter = interpreter::locate_interpreter(config.candidates, config.search_path.as_deref())?;

    let launcher = env::current_exe().map_err(LaunchError::CurrentExe)?;
    let companion = forward::companion_path(&launcher, config.companion)?;

    forward::forward(&interpreter, &companion, args)
}

fn report(config: &LauncherConfig, error: &LaunchError) {
    let messages = match Messages::load(config.language) {
        Ok(messages) => messages,
        Err(catalog) => {
            eprintln!("{}", error);
            eprintln!("{}", catalog);
            return;
        }
    };

    eprintln!("{}", messages.describe(error, config.install_command));
}

fn init_logging() {
    // Quiet by default so forwarded output is untouched.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
}
