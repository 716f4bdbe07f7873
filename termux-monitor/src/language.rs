use serde::Deserialize;

/// Language of the launcher's own diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Maps a locale string such as `ru_RU.UTF-8` or `en` to a language.
    /// `C` and `POSIX` map to English. Unknown locales yield `None`.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let tag = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let primary = tag.split(['_', '-']).next().unwrap_or_default();

        match primary {
            "ru" => Some(Language::Ru),
            "en" | "c" | "posix" => Some(Language::En),
            _ => None,
        }
    }
}
