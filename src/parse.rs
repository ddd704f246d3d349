// Record parser: one delimited row in, one validated BookingRecord out.
//
// The dataset has a fixed column layout with no header-driven mapping; the
// offsets below are assumptions about the export format and are not validated
// against the header line.
use crate::errors::RowParseError;
use crate::types::BookingRecord;
use crate::util::{parse_f64_safe, parse_u32_safe};
use csv::StringRecord;

/// A data row must carry at least this many fields to be usable.
pub const MIN_COLUMNS: usize = 24;

pub mod col {
    pub const BOOKING_ID: usize = 0;
    pub const CUSTOMER_ORIGIN: usize = 6;
    pub const DESTINATION_COUNTRY: usize = 9;
    pub const CITY: usize = 10;
    pub const VISITORS: usize = 11;
    pub const HOTEL_NAME: usize = 16;
    pub const PRICE: usize = 20;
    pub const DISCOUNT: usize = 21;
    pub const MARGIN: usize = 23;
}

fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("").trim()
}

fn numeric(record: &StringRecord, idx: usize, name: &'static str) -> Result<f64, RowParseError> {
    let raw = field(record, idx);
    parse_f64_safe(raw).ok_or_else(|| RowParseError::NumericField {
        field: name,
        value: raw.to_string(),
    })
}

/// Discount fields come in two shapes: `"20%"` means twenty percent (0.20),
/// while a bare `"20"` means the literal value 20.0. The rule is asymmetric
/// on purpose; it mirrors how the upstream export writes the column.
fn parse_discount(raw: &str) -> Option<f64> {
    if raw.contains('%') {
        let stripped = raw.replace('%', "");
        parse_f64_safe(&stripped).map(|v| v / 100.0)
    } else {
        parse_f64_safe(raw)
    }
}

/// Convert one raw row into a `BookingRecord`.
///
/// Pure function: no I/O, no logging. A failed row yields an error describing
/// the first problem found; no partial record is ever produced.
pub fn parse_row(
    record: &StringRecord,
    min_columns: usize,
) -> Result<BookingRecord, RowParseError> {
    if record.len() < min_columns {
        return Err(RowParseError::IncompleteRow {
            found: record.len(),
            required: min_columns,
        });
    }

    let booking_price = numeric(record, col::PRICE, "price")?;
    let profit_margin = numeric(record, col::MARGIN, "margin")?;

    let raw_discount = field(record, col::DISCOUNT);
    let discount = parse_discount(raw_discount).ok_or_else(|| RowParseError::NumericField {
        field: "discount",
        value: raw_discount.to_string(),
    })?;

    let raw_visitors = field(record, col::VISITORS);
    let visitors = parse_u32_safe(raw_visitors).ok_or_else(|| RowParseError::NumericField {
        field: "visitors",
        value: raw_visitors.to_string(),
    })?;

    let city = match field(record, col::CITY) {
        "" => "Unknown".to_string(),
        c => c.to_string(),
    };

    Ok(BookingRecord {
        booking_id: field(record, col::BOOKING_ID).to_string(),
        customer_origin: field(record, col::CUSTOMER_ORIGIN).to_string(),
        destination_country: field(record, col::DESTINATION_COUNTRY).to_string(),
        city,
        hotel_name: field(record, col::HOTEL_NAME).to_string(),
        booking_price,
        discount,
        profit_margin,
        visitors,
    })
}
