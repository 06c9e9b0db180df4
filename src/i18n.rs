use std::collections::HashMap;
use std::sync::OnceLock;

/// Global localization state
static LOCALIZER: OnceLock<Localizer> = OnceLock::new();

/// Initialize the global localizer. Safe to call more than once.
pub fn init() {
    localizer();
}

fn localizer() -> &'static Localizer {
    LOCALIZER.get_or_init(Localizer::new)
}

/// Get a localized message by key
pub fn t(key: &str) -> String {
    localizer().get(key)
}

/// Get a localized message by key with `{$name}` placeholders filled in
pub fn t_with_args(key: &str, args: &[(&str, &dyn std::fmt::Display)]) -> String {
    localizer().get_with_args(key, args)
}

#[derive(Debug)]
pub struct Localizer {
    messages: HashMap<String, String>,
}

impl Localizer {
    fn new() -> Self {
        let language = Self::detect_language();
        Self {
            messages: Self::load_messages(&language),
        }
    }

    fn detect_language() -> String {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            let Ok(value) = std::env::var(var) else {
                continue;
            };
            // "nb_NO.UTF-8" -> "nb"
            let lang_code = value
                .split('.')
                .next()
                .unwrap_or(&value)
                .split(['_', '-'])
                .next()
                .unwrap_or_default()
                .to_lowercase();

            match lang_code.as_str() {
                "nb" | "no" | "nor" => return "nb".to_string(),
                "en" => return "en".to_string(),
                _ => continue,
            }
        }

        "en".to_string()
    }

    /// English is always loaded first; other languages override what they
    /// translate. Keys left out of a translation stay in English.
    fn load_messages(language: &str) -> HashMap<String, String> {
        let mut messages = Self::parse_catalogue(include_str!("../locales/en.ftl"));
        if language == "nb" {
            messages.extend(Self::parse_catalogue(include_str!("../locales/nb.ftl")));
        }
        messages
    }

    // Plain `key = value` lines; comments start with '#'
    fn parse_catalogue(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once(" = "))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect()
    }

    fn get(&self, key: &str) -> String {
        self.messages.get(key).cloned().unwrap_or_else(|| {
            tracing::warn!("Missing translation key: {key}");
            format!("MISSING: {key}")
        })
    }

    fn get_with_args(&self, key: &str, args: &[(&str, &dyn std::fmt::Display)]) -> String {
        let mut message = self.get(key);
        for (var_name, value) in args {
            let placeholder = format!("{{${var_name}}}");
            message = message.replace(&placeholder, &value.to_string());
        }
        message
    }
}

#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::t($key)
    };
}

#[macro_export]
macro_rules! t_args {
    ($key:expr, $($name:expr => $value:expr),*) => {{
        let args: &[(&str, &dyn std::fmt::Display)] = &[
            $(
                ($name, &$value),
            )*
        ];
        $crate::i18n::t_with_args($key, args)
    }};
}
