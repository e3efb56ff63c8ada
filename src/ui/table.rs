use tabled::{Table, Tabled, settings::Style};

use crate::record::{TreeRecord, TreeStats};

#[derive(Tabled)]
struct TreeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Species")]
    species: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Planted")]
    planted: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Planter")]
    planter: String,
}

/// Render records as a terminal table, preserving list order
pub fn tree_table(trees: &[TreeRecord]) -> String {
    if trees.is_empty() {
        return String::new();
    }

    let rows: Vec<TreeRow> = trees
        .iter()
        .map(|t| TreeRow {
            id: t.id,
            species: t.species.clone(),
            location: format!("{:.4}, {:.4}", t.latitude, t.longitude),
            planted: t.planted_date.to_string(),
            status: t.status.clone(),
            planter: t.planter_name.clone().unwrap_or_default(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render aggregate counts as a metric/value table
pub fn stats_table(stats: &TreeStats) -> String {
    let rows = vec![
        StatRow {
            metric: "Total trees".to_string(),
            value: stats.total_trees.to_string(),
        },
        StatRow {
            metric: "Species".to_string(),
            value: stats.species_count.to_string(),
        },
        StatRow {
            metric: "Healthy".to_string(),
            value: stats.healthy_trees.to_string(),
        },
        StatRow {
            metric: "Needs attention".to_string(),
            value: stats.needs_attention.to_string(),
        },
    ];

    Table::new(rows).with(Style::rounded()).to_string()
}
