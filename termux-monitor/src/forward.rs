use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::error::LaunchError;
use crate::interpreter::Interpreter;

/// Path of `companion` in the directory holding `launcher`.
pub fn companion_path(launcher: &Path, companion: &str) -> Result<PathBuf, LaunchError> {
    let dir = launcher
        .parent()
        .ok_or_else(|| LaunchError::NoParentDir(launcher.to_path_buf()))?;
    Ok(dir.join(companion))
}

/// `<interpreter> <companion> <args...>` with inherited stdio and environment.
pub fn build_command<I>(interpreter: &Interpreter, companion: &Path, args: I) -> Command
where
    I: IntoIterator<Item = OsString>,
{
    let mut command = Command::new(&interpreter.path);
    command.arg(companion).args(args);
    command
}

/// Hands control over to the companion and yields its exit code.
///
/// On Unix the launcher process is replaced, so this only returns on failure.
pub fn forward<I>(interpreter: &Interpreter, companion: &Path, args: I) -> Result<i32, LaunchError>
where
    I: IntoIterator<Item = OsString>,
{
    let command = build_command(interpreter, companion, args);
    debug!(
        interpreter = interpreter.name,
        program = %interpreter.path.display(),
        companion = %companion.display(),
        args = command.get_args().count() - 1,
        "forwarding to companion"
    );
    run(command, &interpreter.path)
}

#[cfg(unix)]
fn run(mut command: Command, program: &Path) -> Result<i32, LaunchError> {
    use std::os::unix::process::CommandExt;

    let source = command.exec();
    Err(LaunchError::Spawn {
        program: program.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
fn run(mut command: Command, program: &Path) -> Result<i32, LaunchError> {
    let status = command.status().map_err(|source| LaunchError::Spawn {
        program: program.to_path_buf(),
        source,
    })?;
    // Killed without an exit code.
    Ok(status.code().unwrap_or(1))
}
