use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tierly_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "advisor.user_count",
        &config.advisor.user_count.to_string(),
        field_source(
            "advisor.user_count",
            &["TIERLY_DEFAULT_USER_COUNT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "advisor.intensity",
        &config.advisor.intensity.to_string(),
        field_source(
            "advisor.intensity",
            &["TIERLY_DEFAULT_INTENSITY"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            &["TIERLY_LOGGING_LEVEL", "TIERLY_LOG_LEVEL"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        field_source(
            "logging.format",
            &["TIERLY_LOGGING_FORMAT", "TIERLY_LOG_FORMAT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("  {key} = {value} ({source})")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("tierly.toml"), PathBuf::from("config/tierly.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key: &str,
    env_vars: &[&str],
    file_doc: Option<&Value>,
    file_path: Option<&Path>,
) -> String {
    for env_var in env_vars {
        if env::var(env_var).map(|value| !value.trim().is_empty()).unwrap_or(false) {
            return format!("env: {env_var}");
        }
    }

    if let (Some(doc), Some(path)) = (file_doc, file_path) {
        if file_has_key(doc, key) {
            return format!("file: {}", path.display());
        }
    }

    "default".to_string()
}

fn file_has_key(doc: &Value, dotted_key: &str) -> bool {
    let mut current = doc;
    for part in dotted_key.split('.') {
        match current.get(part) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_key_lookup_walks_nested_tables() {
        let doc: Value = "[advisor]\nuser_count = 25".parse().unwrap();

        assert!(file_has_key(&doc, "advisor.user_count"));
        assert!(!file_has_key(&doc, "advisor.intensity"));
        assert!(!file_has_key(&doc, "logging.level"));
    }

    #[test]
    fn render_line_includes_key_value_and_source() {
        let line = render_line("advisor.user_count", "10", "default".to_string());
        assert_eq!(line, "  advisor.user_count = 10 (default)");
    }
}
