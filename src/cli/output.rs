use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use ipcat::{Interval, RankEntry};

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| {
            Cell::new(title)
                .add_attribute(Attribute::Bold)
                .fg(Color::Green)
        })
        .collect()
}

/*--------------------------------------------------------------------------------------
  Interval Table
--------------------------------------------------------------------------------------*/

pub fn interval_table(intervals: &[&Interval]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(header(&["First IP", "Last IP", "Name", "URL"]));

    for interval in intervals {
        table.add_row(vec![
            Cell::new(interval.left()).add_attribute(Attribute::Bold),
            Cell::new(interval.right()).add_attribute(Attribute::Bold),
            Cell::new(interval.name()),
            Cell::new(interval.url()),
        ]);
    }

    println!("{table}");
}

/*--------------------------------------------------------------------------------------
  Rank Table
--------------------------------------------------------------------------------------*/

pub fn rank_table(rank: &[RankEntry]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(header(&["Datacenter Name", "Total IPs"]));

    for entry in rank {
        table.add_row(vec![
            Cell::new(&entry.name).add_attribute(Attribute::Bold),
            Cell::new(&entry.total),
        ]);
    }

    // Right-align the Total IPs column
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");

    // Print rank-table summary
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![Cell::new(rank.len()), Cell::new("Providers")]);
    summary_table.add_row(vec![
        Cell::new(
            rank.iter()
                .map(|entry| &entry.total)
                .sum::<ipcat::num_bigint::BigUint>(),
        ),
        Cell::new("IP Addresses"),
    ]);

    if let Some(column) = summary_table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{summary_table}");
}
