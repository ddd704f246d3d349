// Entry point and CLI flow.
//
// The binary is a one-shot batch job: load and validate the dataset, print
// the three report answers, optionally export a JSON summary, exit. All
// per-row and file-level failures are absorbed inside the loader; the only
// user-visible failure modes are a "no usable data" diagnostic (exit code 1)
// and summary-write errors.
use anyhow::{bail, Context, Result};
use booking_insights::loader::{self, LoadOptions, Utf8Policy};
use booking_insights::types::RunSummary;
use booking_insights::util::{format_int, format_number};
use booking_insights::{grouping, output, reports};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "booking-insights")]
#[command(about = "Aggregate reports over a delimited hotel-booking dataset")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to the booking dataset (delimited text, first line is a header)
    #[arg(value_name = "DATASET")]
    dataset: PathBuf,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Fail on malformed UTF-8 instead of substituting the bad bytes
    #[arg(long)]
    strict_encoding: bool,

    /// Write a JSON summary of the answers to this path
    #[arg(long, value_name = "PATH")]
    summary_out: Option<String>,

    /// Number of leaderboard rows to print per hotel ranking
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<i32> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }
    let options = LoadOptions {
        delimiter: args.delimiter as u8,
        encoding: if args.strict_encoding {
            Utf8Policy::Strict
        } else {
            Utf8Policy::Lossy
        },
        ..LoadOptions::default()
    };

    let (records, report) = loader::load(&args.dataset, &options);
    if records.is_empty() {
        println!(
            "No usable booking data in '{}' (missing file, unreadable, or every row invalid).",
            args.dataset.display()
        );
        return Ok(1);
    }
    info!(
        "loaded {} bookings ({} rows skipped)",
        records.len(),
        report.skipped_rows
    );

    println!(
        "Analyzed {} bookings from '{}' ({} rows skipped)\n",
        format_int(records.len()),
        args.dataset.display(),
        format_int(report.skipped_rows)
    );

    // Query 1: destination country with the most bookings. The dataset is
    // non-empty here, so all three answers below exist.
    let top_country = reports::top_destination(&records)
        .context("frequency query returned nothing for a non-empty dataset")?;
    println!(
        "Top destination country: {} ({} bookings)\n",
        top_country.country,
        format_int(top_country.bookings)
    );

    let groups = grouping::aggregate(&records);

    // Query 2: most economical hotel.
    let economical = reports::rank_economical(&groups);
    let eco_winner = economical
        .first()
        .context("economical ranking returned nothing for a non-empty dataset")?;
    println!("Most economical hotel:");
    println!(
        "  {} ({}, {}) - score {}",
        eco_winner.group.hotel_name,
        eco_winner.group.city,
        eco_winner.group.destination_country,
        format_number(eco_winner.total_score, 2)
    );
    println!(
        "  avg price {} (score {}), avg discount {} (score {}), avg margin {} (score {})\n",
        format_number(eco_winner.group.avg_price, 2),
        format_number(eco_winner.price_score, 2),
        format_number(eco_winner.group.avg_discount, 2),
        format_number(eco_winner.discount_score, 2),
        format_number(eco_winner.group.avg_margin, 2),
        format_number(eco_winner.margin_score, 2)
    );
    output::preview_table_rows(&output::economy_rows(&economical), args.top);

    // Query 3: most profitable hotel.
    let profitable = reports::rank_profitable(&groups);
    let profit_winner = profitable
        .first()
        .context("profitable ranking returned nothing for a non-empty dataset")?;
    println!("Most profitable hotel:");
    println!(
        "  {} ({}, {}) - score {}",
        profit_winner.group.hotel_name,
        profit_winner.group.city,
        profit_winner.group.destination_country,
        format_number(profit_winner.total_score, 2)
    );
    println!(
        "  visitors {} (score {}), avg margin {} (score {})\n",
        format_int(profit_winner.group.total_visitors),
        format_number(profit_winner.visitors_score, 2),
        format_number(profit_winner.group.avg_margin, 2),
        format_number(profit_winner.margin_score, 2)
    );
    output::preview_table_rows(&output::profit_rows(&profitable), args.top);

    if let Some(path) = &args.summary_out {
        let summary = RunSummary {
            records_analyzed: records.len(),
            rows_skipped: report.skipped_rows,
            top_country: top_country.country.clone(),
            top_country_bookings: top_country.bookings,
            most_economical_hotel: eco_winner.group.hotel_name.clone(),
            most_economical_score: eco_winner.total_score,
            most_profitable_hotel: profit_winner.group.hotel_name.clone(),
            most_profitable_score: profit_winner.total_score,
        };
        output::write_json(path, &summary)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("failed to write summary to '{}'", path))?;
        println!("(Summary exported to {})", path);
    }

    Ok(0)
}
