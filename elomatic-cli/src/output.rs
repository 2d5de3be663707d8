/// Output formatting: terminal table and JSON.
use elomatic_core::{ComparisonOutcome, ComparisonTier, Item};
use serde::Serialize;

#[derive(Serialize)]
struct JsonListedItem<'a> {
    rank: usize,
    id: usize,
    title: &'a str,
    score: i64,
    comparisons: u32,
    tier: ComparisonTier,
}

fn tier_label(tier: ComparisonTier) -> &'static str {
    match tier {
        ComparisonTier::Never => "never",
        ComparisonTier::Few => "few",
        ComparisonTier::Several => "several",
        ComparisonTier::Many => "many",
    }
}

/// Render a sorted view as a table. `Id` is the stored index used by `delete`.
pub fn format_table(view: &[(usize, &Item)]) -> String {
    if view.is_empty() {
        return "No items yet. Add some items to get started!\n".to_string();
    }

    let title_width = view.iter()
        .map(|(_, item)| item.title().chars().count())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    let mut out = String::new();
    out.push_str(&format!(" # | Id | {:<title_width$} | Score | Comparisons\n", "Item"));
    out.push_str(&format!("---|----|-{}-|-------|------------\n", "-".repeat(title_width)));

    for (rank, (id, item)) in view.iter().enumerate() {
        out.push_str(&format!(
            "{:>2} | {:>2} | {:<title_width$} | {:>5} | {:>4} ({})\n",
            rank + 1, id, item.title(), item.score, item.comparisons, tier_label(item.tier()),
        ));
    }

    out.push_str(&format!("\n{} items\n", view.len()));
    out
}

pub fn print_table(view: &[(usize, &Item)]) {
    print!("{}", format_table(view));
}

pub fn format_json(view: &[(usize, &Item)]) -> String {
    let items: Vec<JsonListedItem> = view
        .iter()
        .enumerate()
        .map(|(rank, (id, item))| JsonListedItem {
            rank: rank + 1,
            id: *id,
            title: item.title(),
            score: item.score,
            comparisons: item.comparisons,
            tier: item.tier(),
        })
        .collect();

    serde_json::to_string_pretty(&items).unwrap_or_else(|e| crate::bail(format!("Failed to encode JSON: {e}")))
}

/// Print results as JSON.
pub fn print_json(view: &[(usize, &Item)]) {
    println!("{}", format_json(view));
}

/// One-line summary of a resolved comparison, e.g. `Pizza 1500 → 1516 (+16)`.
pub fn format_outcome(outcome: &ComparisonOutcome) -> String {
    format!(
        "{} {} → {} ({:+})   {} {} → {} ({:+})",
        outcome.winner_title, outcome.winner_before, outcome.winner_after, outcome.winner_delta(),
        outcome.loser_title, outcome.loser_before, outcome.loser_after, outcome.loser_delta(),
    )
}
