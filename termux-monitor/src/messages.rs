use serde::Deserialize;
use std::fmt::Display;

use crate::error::LaunchError;
use crate::language::Language;

const CATALOG_JSON: &str = include_str!("../locales/messages.json");

/// Diagnostic templates for one language, with `{name}` placeholders.
#[derive(Debug, Deserialize)]
pub struct Messages {
    interpreter_not_found: String,
    install_hint: String,
    launch_failed: String,
    launcher_location_failed: String,
}

#[derive(Deserialize)]
struct Catalog {
    ru: Messages,
    en: Messages,
}

impl Messages {
    pub fn load(language: Language) -> Result<Self, LaunchError> {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON)?;
        Ok(match language {
            Language::Ru => catalog.ru,
            Language::En => catalog.en,
        })
    }

    /// Two lines: what is missing, and the command that installs it.
    pub fn interpreter_not_found(&self, candidates: &[&str], install_command: &str) -> String {
        let candidates = candidates.join(", ");
        format!(
            "{}\n{}",
            render(&self.interpreter_not_found, &[("candidates", &candidates)]),
            render(&self.install_hint, &[("command", install_command)]),
        )
    }

    pub fn launch_failed(&self, program: &str, error: &dyn Display) -> String {
        let error = error.to_string();
        render(&self.launch_failed, &[("program", program), ("error", &error)])
    }

    pub fn launcher_location_failed(&self, error: &dyn Display) -> String {
        let error = error.to_string();
        render(&self.launcher_location_failed, &[("error", &error)])
    }

    /// User-facing text for a failed launch.
    pub fn describe(&self, error: &LaunchError, install_command: &str) -> String {
        match error {
            LaunchError::InterpreterNotFound { searched } => {
                self.interpreter_not_found(searched, install_command)
            }
            LaunchError::Spawn { program, source } => {
                self.launch_failed(&program.display().to_string(), source)
            }
            LaunchError::CurrentExe(source) => self.launcher_location_failed(source),
            LaunchError::NoParentDir(path) => self.launcher_location_failed(&path.display()),
            LaunchError::Catalog(_) => error.to_string(),
        }
    }
}

fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn every_language_loads() {
        for language in [Language::Ru, Language::En] {
            let messages = Messages::load(language).unwrap();
            assert!(!messages.interpreter_not_found.is_empty());
            assert!(!messages.install_hint.is_empty());
            assert!(!messages.launch_failed.is_empty());
            assert!(!messages.launcher_location_failed.is_empty());
        }
    }

    #[test]
    fn not_found_names_candidates_and_install_command() {
        for language in [Language::Ru, Language::En] {
            let text = Messages::load(language)
                .unwrap()
                .interpreter_not_found(&["python3", "python"], "pkg install python");
            assert!(text.contains("python3, python"), "{text}");
            assert!(text.contains("pkg install python"), "{text}");
            assert!(!text.contains('{'), "unfilled placeholder in {text}");
            assert_eq!(text.lines().count(), 2);
        }
    }

    #[test]
    fn russian_text() {
        let text = Messages::load(Language::Ru)
            .unwrap()
            .interpreter_not_found(&["python3"], "pkg install python");
        assert!(text.contains("Python не найден"), "{text}");
    }

    #[test]
    fn english_text() {
        let text = Messages::load(Language::En)
            .unwrap()
            .launch_failed("/usr/bin/python3", &"permission denied");
        assert_eq!(text, "Failed to launch /usr/bin/python3: permission denied");
    }

    #[test]
    fn spawn_failure_names_the_interpreter() {
        let error = LaunchError::Spawn {
            program: PathBuf::from("/usr/bin/python3"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let text = Messages::load(Language::En).unwrap().describe(&error, "pkg install python");
        assert_eq!(text, "Failed to launch /usr/bin/python3: not found");
    }

    #[test]
    fn location_failures_do_not_blame_the_companion() {
        let messages = Messages::load(Language::Ru).unwrap();
        let errors = [
            LaunchError::CurrentExe(io::Error::new(io::ErrorKind::Other, "no /proc")),
            LaunchError::NoParentDir(PathBuf::from("/")),
        ];
        for error in &errors {
            let text = messages.describe(error, "pkg install python");
            assert!(text.starts_with("Не удалось определить расположение"), "{text}");
            assert!(!text.contains("termux_monitor_client.py"), "{text}");
            assert!(!text.contains("cannot determine"), "{text}");
            assert_eq!(text.lines().count(), 1);
        }
    }

    #[test]
    fn not_found_is_described_with_install_hint() {
        let error = LaunchError::InterpreterNotFound { searched: vec!["python3", "python"] };
        let text = Messages::load(Language::En).unwrap().describe(&error, "pkg install python");
        assert!(text.ends_with("Install it with: pkg install python"), "{text}");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        assert_eq!(render("{a} and {b}", &[("a", "1")]), "1 and {b}");
        assert_eq!(render("{a}{a}", &[("a", "x")]), "xx");
    }
}
