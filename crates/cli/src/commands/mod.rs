pub mod check;
pub mod config;
pub mod reset;
pub mod seed;
pub mod suggest;

use std::path::PathBuf;

use clap::Args;
use closet_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string_pretty(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\
             \"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Snapshot location and owner, overriding config for one invocation.
#[derive(Debug, Clone, Default, Args)]
pub struct ClosetArgs {
    #[arg(long, value_name = "PATH", help = "Closet snapshot file (defaults to closet.path)")]
    pub closet: Option<PathBuf>,
    #[arg(
        long,
        value_name = "ID",
        help = "Owner whose items are used (defaults to closet.owner_id)"
    )]
    pub owner: Option<String>,
}

impl ClosetArgs {
    fn load_config(&self, command: &str) -> Result<AppConfig, CommandResult> {
        let options = LoadOptions {
            overrides: ConfigOverrides {
                closet_path: self.closet.clone(),
                owner_id: self.owner.clone(),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        };

        AppConfig::load(options).map_err(|error| {
            CommandResult::failure(
                command,
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            )
        })
    }
}
