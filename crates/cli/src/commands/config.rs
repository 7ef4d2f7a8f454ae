use std::env;
use std::fs;
use std::path::Path;

use closet_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let lines = [
        "effective config (source precedence: env > file > default):".to_string(),
        render_line(
            "closet.path",
            &config.closet.path.display().to_string(),
            source("closet.path", &["CLOSET_CLOSET_PATH"]),
        ),
        render_line(
            "closet.owner_id",
            &config.closet.owner_id,
            source("closet.owner_id", &["CLOSET_OWNER_ID"]),
        ),
        render_line(
            "logging.level",
            &config.logging.level,
            source("logging.level", &["CLOSET_LOGGING_LEVEL", "CLOSET_LOG_LEVEL"]),
        ),
        render_line(
            "logging.format",
            config.logging.format.as_str(),
            source("logging.format", &["CLOSET_LOGGING_FORMAT", "CLOSET_LOG_FORMAT"]),
        ),
    ];

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    let env_hit = env_keys
        .iter()
        .find(|env_key| env::var(env_key).is_ok_and(|value| !value.trim().is_empty()));
    if let Some(env_key) = env_hit {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_are_found_in_file_document() {
        let doc: Value = "[closet]\nowner_id = \"me\"\n".parse().expect("valid toml");

        assert!(contains_path(&doc, "closet.owner_id"));
        assert!(!contains_path(&doc, "closet.path"));
        assert!(!contains_path(&doc, "logging.level"));
    }

    #[test]
    fn file_source_names_the_file() {
        let doc: Value = "[logging]\nlevel = \"warn\"\n".parse().expect("valid toml");

        assert_eq!(
            field_source("logging.level", &[], Some(&doc), Some(Path::new("closet.toml"))),
            "file (closet.toml)"
        );
        assert_eq!(field_source("logging.format", &[], Some(&doc), None), "default");
    }
}
