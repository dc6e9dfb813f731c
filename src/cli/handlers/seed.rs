use crate::model::{Item, ItemStatus};
use crate::storage::seed_items;
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

use super::CommandContext;

pub fn handle_seed(ctx: &CommandContext, count: Option<usize>, json: bool) -> Result<()> {
    let count = count.unwrap_or(ctx.config.store.seed_count);
    let items = seed_items(count, Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_item_list(&items);
    }
    Ok(())
}

fn print_item_list(items: &[Item]) {
    if items.is_empty() {
        println!("No items.");
        return;
    }

    for item in items {
        println!(
            "{} {} [{}] {}",
            format!("#{}", item.id).cyan(),
            format_status(item.status),
            item.category.to_string().blue(),
            item.name
        );
    }
}

fn format_status(status: ItemStatus) -> colored::ColoredString {
    match status {
        ItemStatus::Active => "active".green(),
        ItemStatus::Paused => "paused".yellow(),
        ItemStatus::Archived => "archived".dimmed(),
    }
}
