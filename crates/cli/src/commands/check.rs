use closet_core::domain::{normalize_closet, Category, NormalizedCloset, SkippedRow};
use closet_core::outfits::missing_required_categories;
use serde::Serialize;
use uuid::Uuid;

use crate::commands::suggest::log_skipped_rows;
use crate::commands::{ClosetArgs, CommandResult};
use crate::snapshot::ClosetSnapshot;

const COMMAND: &str = "check";

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: Category,
    required: bool,
    items: usize,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    closet_path: String,
    owner_id: &'a str,
    total_rows: usize,
    usable_items: usize,
    foreign_rows: usize,
    categories: Vec<CategoryCount>,
    missing_required_categories: Vec<Category>,
    skipped: &'a [SkippedRow],
}

pub fn run(args: ClosetArgs) -> CommandResult {
    let config = match args.load_config(COMMAND) {
        Ok(config) => config,
        Err(result) => return result,
    };

    let snapshot = match ClosetSnapshot::load(&config.closet.path) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            return CommandResult::failure(COMMAND, "snapshot_unavailable", error.to_string(), 3)
        }
    };

    let total_rows = snapshot.items.len();
    let closet = normalize_closet(snapshot.items, &config.closet.owner_id);
    log_skipped_rows(&closet, &Uuid::new_v4().to_string());

    let report = build_report(
        config.closet.path.display().to_string(),
        &config.closet.owner_id,
        total_rows,
        &closet,
    );

    let message = if report.missing_required_categories.is_empty() {
        format!("closet ready: {} usable item(s)", report.usable_items)
    } else {
        let missing: Vec<&str> =
            report.missing_required_categories.iter().map(|category| category.as_str()).collect();
        format!("closet cannot form outfits yet, missing: {}", missing.join(", "))
    };

    match serde_json::to_value(&report) {
        Ok(data) => CommandResult::success_with_data(COMMAND, message, Some(data)),
        Err(error) => CommandResult::failure(COMMAND, "serialization", error.to_string(), 1),
    }
}

fn build_report<'a>(
    closet_path: String,
    owner_id: &'a str,
    total_rows: usize,
    closet: &'a NormalizedCloset,
) -> CheckReport<'a> {
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            required: category.is_required(),
            items: closet.items.iter().filter(|item| item.category == category).count(),
        })
        .collect();
    let items: Vec<_> = closet.items.iter().collect();

    CheckReport {
        closet_path,
        owner_id,
        total_rows,
        usable_items: closet.items.len(),
        foreign_rows: closet.foreign_rows,
        categories,
        missing_required_categories: missing_required_categories(&items),
        skipped: &closet.skipped,
    }
}
