use clap::Args;
use closet_core::domain::{normalize_closet, NormalizedCloset};
use closet_core::errors::ApplicationError;
use closet_core::outfits::{suggest_outfits, OutfitRequest};
use uuid::Uuid;

use crate::commands::{ClosetArgs, CommandResult};
use crate::snapshot::ClosetSnapshot;

const COMMAND: &str = "suggest";

#[derive(Debug, Clone, Default, Args)]
pub struct SuggestArgs {
    #[arg(long, help = "Occasion, e.g. \"job interview\" or \"dinner date\"")]
    pub occasion: String,
    #[arg(long, help = "Desired vibe (recorded, not scored)")]
    pub vibe: Option<String>,
    #[arg(long, help = "Free-text weather such as \"chilly\" or \"summer\"")]
    pub weather: Option<String>,
    #[arg(long, value_name = "CELSIUS", help = "Temperature in °C; wins over --weather")]
    pub temperature: Option<String>,
    #[arg(long, help = "Exclusions such as \"no hoodies, no white shoes\"")]
    pub constraints: Option<String>,
    #[command(flatten)]
    pub closet: ClosetArgs,
}

pub fn run(args: SuggestArgs) -> CommandResult {
    let correlation_id = Uuid::new_v4().to_string();

    let request = match OutfitRequest::from_form(
        &args.occasion,
        args.vibe.as_deref(),
        args.weather.as_deref(),
        args.constraints.as_deref(),
        args.temperature.as_deref(),
    ) {
        Ok(request) => request,
        Err(error) => {
            let error = ApplicationError::from(error).into_interface(&correlation_id);
            return CommandResult::failure(COMMAND, "bad_request", error.to_string(), 2);
        }
    };

    let config = match args.closet.load_config(COMMAND) {
        Ok(config) => config,
        Err(result) => return result,
    };

    tracing::info!(
        event_name = "cli.suggest.started",
        correlation_id = %correlation_id,
        occasion = %request.occasion,
        closet_path = %config.closet.path.display(),
        "outfit suggestion started"
    );

    let snapshot = match ClosetSnapshot::load(&config.closet.path) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            let error =
                ApplicationError::Snapshot(error.to_string()).into_interface(&correlation_id);
            tracing::warn!(
                event_name = "cli.suggest.snapshot_unavailable",
                correlation_id = %correlation_id,
                error = %error,
                "closet snapshot could not be loaded"
            );
            return CommandResult::failure(
                COMMAND,
                "snapshot_unavailable",
                format!("{} ({error})", error.user_message()),
                3,
            );
        }
    };

    let closet = normalize_closet(snapshot.items, &config.closet.owner_id);
    log_skipped_rows(&closet, &correlation_id);

    let result = suggest_outfits(&closet.items, &request);

    tracing::info!(
        event_name = "cli.suggest.completed",
        correlation_id = %correlation_id,
        suggestions = result.suggestions.len(),
        missing = result.missing_required_categories.len(),
        "outfit suggestion completed"
    );

    let message = if result.is_insufficient_closet() {
        let missing: Vec<&str> =
            result.missing_required_categories.iter().map(|category| category.as_str()).collect();
        format!("closet is missing required categories: {}", missing.join(", "))
    } else {
        format!("{} outfit suggestion(s) ranked", result.suggestions.len())
    };

    match serde_json::to_value(&result) {
        Ok(data) => CommandResult::success_with_data(COMMAND, message, Some(data)),
        Err(error) => CommandResult::failure(
            COMMAND,
            "serialization",
            format!("failed to encode suggestions: {error}"),
            1,
        ),
    }
}

pub(crate) fn log_skipped_rows(closet: &NormalizedCloset, correlation_id: &str) {
    for row in &closet.skipped {
        tracing::warn!(
            event_name = "cli.snapshot.skipped_row",
            correlation_id = %correlation_id,
            item_id = %row.id,
            reason = %row.reason,
            "closet row skipped"
        );
    }
}
