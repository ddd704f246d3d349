use crate::types::{EconomicalPick, EconomyRow, ProfitRow, ProfitablePick};
use crate::util::{format_int, format_number};
use serde::Serialize;
use std::error::Error;
use tabled::{settings::Style, Table, Tabled};

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Render the first `max_rows` rows as a markdown table on stdout.
pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

pub fn economy_rows(picks: &[EconomicalPick]) -> Vec<EconomyRow> {
    picks
        .iter()
        .map(|p| EconomyRow {
            hotel: p.group.hotel_name.clone(),
            city: p.group.city.clone(),
            country: p.group.destination_country.clone(),
            avg_price: format_number(p.group.avg_price, 2),
            price_score: format_number(p.price_score, 2),
            discount_score: format_number(p.discount_score, 2),
            margin_score: format_number(p.margin_score, 2),
            total_score: format_number(p.total_score, 2),
        })
        .collect()
}

pub fn profit_rows(picks: &[ProfitablePick]) -> Vec<ProfitRow> {
    picks
        .iter()
        .map(|p| ProfitRow {
            hotel: p.group.hotel_name.clone(),
            city: p.group.city.clone(),
            country: p.group.destination_country.clone(),
            visitors: format_int(p.group.total_visitors),
            visitor_score: format_number(p.visitors_score, 2),
            margin_score: format_number(p.margin_score, 2),
            total_score: format_number(p.total_score, 2),
        })
        .collect()
}
