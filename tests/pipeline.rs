//! End-to-end scenarios: file on disk -> loader -> grouping -> rankings.

use booking_insights::loader::{load, LoadOptions};
use booking_insights::parse::MIN_COLUMNS;
use booking_insights::{grouping, reports};
use std::io::Write;
use tempfile::NamedTempFile;

struct Row<'a> {
    country: &'a str,
    city: &'a str,
    hotel: &'a str,
    visitors: &'a str,
    price: &'a str,
    discount: &'a str,
    margin: &'a str,
}

fn render(row: &Row) -> String {
    let mut fields = vec!["x"; MIN_COLUMNS];
    fields[0] = "B1";
    fields[6] = "Germany";
    fields[9] = row.country;
    fields[10] = row.city;
    fields[11] = row.visitors;
    fields[16] = row.hotel;
    fields[20] = row.price;
    fields[21] = row.discount;
    fields[23] = row.margin;
    fields.join(",")
}

fn dataset(rows: &[Row]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "{}", vec!["header"; MIN_COLUMNS].join(",")).unwrap();
    for row in rows {
        writeln!(f, "{}", render(row)).unwrap();
    }
    f
}

#[test]
fn single_row_parses_and_counts() {
    // One valid row: percent discount lands as a fraction and the frequency
    // query reports that single country with count 1.
    let f = dataset(&[Row {
        country: "France",
        city: "Paris",
        hotel: "HotelX",
        visitors: "5",
        price: "100",
        discount: "10%",
        margin: "0.2",
    }]);
    let (records, report) = load(f.path(), &LoadOptions::default());
    assert_eq!(records.len(), 1);
    assert_eq!(report.skipped_rows, 0);
    assert!((records[0].discount - 0.10).abs() < 1e-12);
    assert_eq!(records[0].city, "Paris");

    let top = reports::top_destination(&records).unwrap();
    assert_eq!(top.country, "France");
    assert_eq!(top.bookings, 1);
}

#[test]
fn identical_prices_leave_ranking_to_other_features() {
    // Both hotels share the same price: the price dimension is degenerate
    // (50 for everyone) and discount/margin decide the economical winner.
    let f = dataset(&[
        Row {
            country: "France",
            city: "Paris",
            hotel: "Generous",
            visitors: "5",
            price: "100",
            discount: "30%",
            margin: "0.1",
        },
        Row {
            country: "France",
            city: "Paris",
            hotel: "Stingy",
            visitors: "5",
            price: "100",
            discount: "5%",
            margin: "0.4",
        },
    ]);
    let (records, _) = load(f.path(), &LoadOptions::default());
    let groups = grouping::aggregate(&records);
    let ranked = reports::rank_economical(&groups);
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|p| p.price_score == 50.0));
    assert_eq!(ranked[0].group.hotel_name, "Generous");
    assert!(ranked[0].total_score > ranked[1].total_score);
}

#[test]
fn header_only_file_is_a_soft_no_data_case() {
    let f = dataset(&[]);
    let (records, report) = load(f.path(), &LoadOptions::default());
    assert!(records.is_empty());
    assert_eq!(report.total_rows, 0);

    // The orchestrator must short-circuit, not panic.
    assert!(reports::top_destination(&records).is_none());
    let groups = grouping::aggregate(&records);
    assert!(groups.is_empty());
    assert!(reports::most_economical(&groups).is_none());
    assert!(reports::most_profitable(&groups).is_none());
}

#[test]
fn bare_and_percent_discounts_diverge_in_scoring() {
    // "15" (no marker) stays 15.0 while "15%" becomes 0.15; under one shared
    // range the bare value must dominate the discount dimension.
    let f = dataset(&[
        Row {
            country: "France",
            city: "Paris",
            hotel: "BareHotel",
            visitors: "5",
            price: "100",
            discount: "15",
            margin: "0.2",
        },
        Row {
            country: "France",
            city: "Paris",
            hotel: "PercentHotel",
            visitors: "5",
            price: "100",
            discount: "15%",
            margin: "0.2",
        },
    ]);
    let (records, _) = load(f.path(), &LoadOptions::default());
    let bare = records.iter().find(|r| r.hotel_name == "BareHotel").unwrap();
    let pct = records
        .iter()
        .find(|r| r.hotel_name == "PercentHotel")
        .unwrap();
    assert_eq!(bare.discount, 15.0);
    assert!((pct.discount - 0.15).abs() < 1e-12);

    let groups = grouping::aggregate(&records);
    let ranked = reports::rank_economical(&groups);
    let bare_pick = ranked
        .iter()
        .find(|p| p.group.hotel_name == "BareHotel")
        .unwrap();
    let pct_pick = ranked
        .iter()
        .find(|p| p.group.hotel_name == "PercentHotel")
        .unwrap();
    assert_eq!(bare_pick.discount_score, 100.0);
    assert_eq!(pct_pick.discount_score, 0.0);
    assert_eq!(ranked[0].group.hotel_name, "BareHotel");
}

#[test]
fn loader_output_never_exceeds_data_line_count() {
    let f = dataset(&[
        Row {
            country: "France",
            city: "Paris",
            hotel: "HotelX",
            visitors: "5",
            price: "100",
            discount: "10%",
            margin: "0.2",
        },
        Row {
            country: "Spain",
            city: "Madrid",
            hotel: "HotelY",
            visitors: "oops",
            price: "90",
            discount: "5%",
            margin: "0.3",
        },
    ]);
    let (records, report) = load(f.path(), &LoadOptions::default());
    assert_eq!(report.total_rows, 2);
    assert!(records.len() <= report.total_rows);
    assert_eq!(records.len(), 1);
    assert_eq!(report.skipped_rows, 1);
}

#[test]
fn full_pipeline_picks_both_winners() {
    let f = dataset(&[
        Row {
            country: "France",
            city: "Paris",
            hotel: "Budget",
            visitors: "10",
            price: "60",
            discount: "25%",
            margin: "0.05",
        },
        Row {
            country: "France",
            city: "Paris",
            hotel: "Budget",
            visitors: "8",
            price: "80",
            discount: "15%",
            margin: "0.10",
        },
        Row {
            country: "Italy",
            city: "Rome",
            hotel: "Grand",
            visitors: "400",
            price: "300",
            discount: "2%",
            margin: "0.45",
        },
    ]);
    let (records, _) = load(f.path(), &LoadOptions::default());
    assert_eq!(records.len(), 3);

    let top = reports::top_destination(&records).unwrap();
    assert_eq!(top.country, "France");
    assert_eq!(top.bookings, 2);

    let groups = grouping::aggregate(&records);
    assert_eq!(groups.len(), 2);
    let budget = groups.iter().find(|g| g.hotel_name == "Budget").unwrap();
    assert_eq!(budget.bookings, 2);
    assert_eq!(budget.avg_price, 70.0);
    assert_eq!(budget.total_visitors, 18);

    let eco = reports::most_economical(&groups).unwrap();
    assert_eq!(eco.group.hotel_name, "Budget");
    assert_eq!(eco.total_score, 100.0);

    let prof = reports::most_profitable(&groups).unwrap();
    assert_eq!(prof.group.hotel_name, "Grand");
    assert_eq!(prof.total_score, 100.0);
}
