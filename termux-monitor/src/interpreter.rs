use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::LaunchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    /// Candidate name that matched.
    pub name: &'static str,
    pub path: PathBuf,
}

/// Looks up the first candidate present on `search_path`.
///
/// Candidates are tried in order and each one is looked for in every
/// directory before moving on to the next, so a `python3` late in the
/// search path is still preferred over an earlier `python`.
pub fn locate_interpreter(
    candidates: &'static [&'static str],
    search_path: Option<&OsStr>,
) -> Result<Interpreter, LaunchError> {
    let dirs: Vec<PathBuf> = search_path
        .map(|value| {
            env::split_paths(value)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();

    for &name in candidates {
        debug!(candidate = name, dirs = dirs.len(), "probing search path");
        if let Some(path) = find_executable(name, &dirs) {
            debug!(candidate = name, path = %path.display(), "interpreter found");
            return Ok(Interpreter { name, path });
        }
    }

    Err(LaunchError::InterpreterNotFound {
        searched: candidates.to_vec(),
    })
}

fn find_executable(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| file_names(name).into_iter().map(move |file| dir.join(file)))
        .find(|path| is_executable(path))
}

fn file_names(name: &str) -> Vec<String> {
    if cfg!(windows) {
        vec![format!("{name}.exe"), name.to_string()]
    } else {
        vec![name.to_string()]
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}
