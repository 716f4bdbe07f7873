use std::ffi::OsString;

use crate::language::Language;

pub const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];
pub const COMPANION_SCRIPT: &str = "termux_monitor_client.py";
pub const INSTALL_COMMAND: &str = "pkg install python";

pub const LANG_ENV: &str = "TERMUX_MONITOR_LANG";
pub const LOG_ENV: &str = "TERMUX_MONITOR_LOG";

// POSIX precedence
const LOCALE_ENV: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug)]
pub struct LauncherConfig {
    /// Interpreter names, most specific first.
    pub candidates: &'static [&'static str],
    /// File name of the script next to the launcher.
    pub companion: &'static str,
    pub install_command: &'static str,
    pub language: Language,
    pub search_path: Option<OsString>,
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        LauncherConfig {
            candidates: INTERPRETER_CANDIDATES,
            companion: COMPANION_SCRIPT,
            install_command: INSTALL_COMMAND,
            language: detect_language(&lookup),
            search_path: lookup("PATH"),
        }
    }
}

fn detect_language<F>(lookup: &F) -> Language
where
    F: Fn(&str) -> Option<OsString>,
{
    let forced = lookup(LANG_ENV).and_then(|value| Language::from_locale(&value.to_string_lossy()));
    if let Some(language) = forced {
        return language;
    }

    LOCALE_ENV
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .and_then(|value| Language::from_locale(&value.to_string_lossy()))
        .unwrap_or_default()
}
