use clap::Args;
use serde_json::json;
use uuid::Uuid;

use crate::commands::{ClosetArgs, CommandResult};
use crate::snapshot::ClosetSnapshot;

const COMMAND: &str = "reset";

/// Text that must be passed to `--confirm` before any row is removed.
pub const CONFIRMATION: &str = "DELETE";

#[derive(Debug, Clone, Default, Args)]
pub struct ResetArgs {
    #[arg(long, value_name = "TEXT", help = "Type DELETE to confirm the reset")]
    pub confirm: Option<String>,
    #[command(flatten)]
    pub closet: ClosetArgs,
}

pub fn run(args: ResetArgs) -> CommandResult {
    if args.confirm.as_deref().map(str::trim) != Some(CONFIRMATION) {
        return CommandResult::failure(
            COMMAND,
            "confirmation_required",
            format!("please type {CONFIRMATION} to confirm reset"),
            2,
        );
    }

    let config = match args.closet.load_config(COMMAND) {
        Ok(config) => config,
        Err(result) => return result,
    };
    let path = &config.closet.path;
    let owner_id = &config.closet.owner_id;

    let mut snapshot = match ClosetSnapshot::load_or_default(path) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            return CommandResult::failure(COMMAND, "snapshot_unavailable", error.to_string(), 3)
        }
    };

    let removed = remove_owner_rows(&mut snapshot, owner_id);

    if removed > 0 {
        if let Err(error) = snapshot.save(path) {
            return CommandResult::failure(COMMAND, "snapshot_write", error.to_string(), 3);
        }
    }

    tracing::info!(
        event_name = "cli.reset.completed",
        correlation_id = %Uuid::new_v4(),
        owner_id = %owner_id,
        removed,
        remaining = snapshot.items.len(),
        "closet reset"
    );

    CommandResult::success_with_data(
        COMMAND,
        format!("deleted all closet items for {owner_id}"),
        Some(json!({
            "closet_path": path.display().to_string(),
            "owner_id": owner_id,
            "removed": removed,
            "remaining": snapshot.items.len(),
        })),
    )
}

/// Drops every row owned by `owner_id` and returns how many went.
pub fn remove_owner_rows(snapshot: &mut ClosetSnapshot, owner_id: &str) -> usize {
    let before = snapshot.items.len();
    snapshot.items.retain(|row| row.owner_id != owner_id);
    before - snapshot.items.len()
}
