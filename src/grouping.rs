// Generic partitioning plus the booking-specific aggregation built on it.
use crate::types::{BookingRecord, GroupStats};
use crate::util::average;
use std::collections::HashMap;
use std::hash::Hash;

/// Partition `items` by `key_fn`. Every item lands in exactly one bucket and
/// no bucket is ever empty, so downstream averages are always well-defined.
pub fn group_by<'a, T, K, F>(items: &'a [T], key_fn: F) -> HashMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut map: HashMap<K, Vec<&T>> = HashMap::new();
    for item in items {
        map.entry(key_fn(item)).or_default().push(item);
    }
    map
}

/// Collapse the records into per-(country, hotel, city) statistics.
///
/// Hash partitioning has no inherent order, so the result is sorted by the
/// group key; "first maximum wins" tie-breaks downstream are then
/// deterministic. Empty input yields an empty output.
pub fn aggregate(records: &[BookingRecord]) -> Vec<GroupStats> {
    let grouped = group_by(records, |r| {
        (
            r.destination_country.clone(),
            r.hotel_name.clone(),
            r.city.clone(),
        )
    });

    let mut stats: Vec<GroupStats> = grouped
        .into_iter()
        .map(|((country, hotel, city), members)| {
            let prices: Vec<f64> = members.iter().map(|r| r.booking_price).collect();
            let discounts: Vec<f64> = members.iter().map(|r| r.discount).collect();
            let margins: Vec<f64> = members.iter().map(|r| r.profit_margin).collect();
            let total_visitors: u64 = members.iter().map(|r| u64::from(r.visitors)).sum();
            GroupStats {
                destination_country: country,
                hotel_name: hotel,
                city,
                bookings: members.len(),
                avg_price: average(&prices),
                avg_discount: average(&discounts),
                avg_margin: average(&margins),
                total_visitors,
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        (&a.destination_country, &a.hotel_name, &a.city)
            .cmp(&(&b.destination_country, &b.hotel_name, &b.city))
    });
    stats
}
