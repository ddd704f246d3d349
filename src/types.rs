use serde::Serialize;
use tabled::Tabled;

/// One validated row of the booking dataset.
///
/// Built only by `parse::parse_row`; a row that fails any check produces no
/// record at all, so every field here is already trimmed and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub booking_id: String,
    pub customer_origin: String,
    pub destination_country: String,
    /// `"Unknown"` when the source row has no usable city field.
    pub city: String,
    pub hotel_name: String,
    pub booking_price: f64,
    /// Fraction when the source carried a `%` marker (`"20%"` -> 0.20),
    /// raw numeric value otherwise (`"20"` -> 20.0). The asymmetry is in
    /// the data and is kept as-is.
    pub discount: f64,
    pub profit_margin: f64,
    pub visitors: u32,
}

/// Aggregate over all records sharing a (country, hotel, city) key.
///
/// Always derived from a non-empty group, so the averages are well-defined.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub destination_country: String,
    pub hotel_name: String,
    pub city: String,
    pub bookings: usize,
    pub avg_price: f64,
    pub avg_discount: f64,
    pub avg_margin: f64,
    pub total_visitors: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryFrequency {
    pub country: String,
    pub bookings: usize,
}

/// Scored candidate for the "most economical hotel" question.
#[derive(Debug, Clone)]
pub struct EconomicalPick {
    pub group: GroupStats,
    pub total_score: f64,
    pub price_score: f64,
    pub discount_score: f64,
    pub margin_score: f64,
}

/// Scored candidate for the "most profitable hotel" question.
#[derive(Debug, Clone)]
pub struct ProfitablePick {
    pub group: GroupStats,
    pub total_score: f64,
    pub visitors_score: f64,
    pub margin_score: f64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct EconomyRow {
    #[tabled(rename = "Hotel")]
    pub hotel: String,
    #[tabled(rename = "City")]
    pub city: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "AvgPrice")]
    pub avg_price: String,
    #[tabled(rename = "PriceScore")]
    pub price_score: String,
    #[tabled(rename = "DiscountScore")]
    pub discount_score: String,
    #[tabled(rename = "MarginScore")]
    pub margin_score: String,
    #[tabled(rename = "TotalScore")]
    pub total_score: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ProfitRow {
    #[tabled(rename = "Hotel")]
    pub hotel: String,
    #[tabled(rename = "City")]
    pub city: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Visitors")]
    pub visitors: String,
    #[tabled(rename = "VisitorScore")]
    pub visitor_score: String,
    #[tabled(rename = "MarginScore")]
    pub margin_score: String,
    #[tabled(rename = "TotalScore")]
    pub total_score: String,
}

/// Machine-readable summary of one analysis run (`--summary-out`).
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub records_analyzed: usize,
    pub rows_skipped: usize,
    pub top_country: String,
    pub top_country_bookings: usize,
    pub most_economical_hotel: String,
    pub most_economical_score: f64,
    pub most_profitable_hotel: String,
    pub most_profitable_score: f64,
}
