// Ranking orchestrator: the three business questions, answered over the
// grouped dataset. Scoring directions differ per question on purpose: a low
// margin is "economical" from the customer's side, a high margin is
// "profitable" from the business side.
use crate::grouping::group_by;
use crate::scoring::{composite, feature_range, score, Direction};
use crate::types::{BookingRecord, CountryFrequency, EconomicalPick, GroupStats, ProfitablePick};
use std::cmp::Ordering;

/// Destination country with the most bookings.
///
/// Ties are broken by country name after the count comparison, so the answer
/// does not depend on hash iteration order.
pub fn top_destination(records: &[BookingRecord]) -> Option<CountryFrequency> {
    let grouped = group_by(records, |r| r.destination_country.clone());
    let mut counts: Vec<CountryFrequency> = grouped
        .into_iter()
        .map(|(country, members)| CountryFrequency {
            country,
            bookings: members.len(),
        })
        .collect();
    counts.sort_by(|a, b| {
        b.bookings
            .cmp(&a.bookings)
            .then_with(|| a.country.cmp(&b.country))
    });
    counts.into_iter().next()
}

/// All groups scored for the "most economical hotel" question, best first.
///
/// Price and margin count as lower-is-better, discount as higher-is-better;
/// the total is the unweighted mean of the three.
pub fn rank_economical(groups: &[GroupStats]) -> Vec<EconomicalPick> {
    let Some(price_range) = feature_range(groups, |g| g.avg_price) else {
        return Vec::new();
    };
    let Some(discount_range) = feature_range(groups, |g| g.avg_discount) else {
        return Vec::new();
    };
    let Some(margin_range) = feature_range(groups, |g| g.avg_margin) else {
        return Vec::new();
    };

    let mut picks: Vec<EconomicalPick> = groups
        .iter()
        .map(|g| {
            let price_score = score(g.avg_price, price_range, Direction::LowerIsBetter);
            let discount_score = score(g.avg_discount, discount_range, Direction::HigherIsBetter);
            let margin_score = score(g.avg_margin, margin_range, Direction::LowerIsBetter);
            EconomicalPick {
                group: g.clone(),
                total_score: composite(&[price_score, discount_score, margin_score]),
                price_score,
                discount_score,
                margin_score,
            }
        })
        .collect();
    // Stable sort: equal totals keep the aggregation's key order.
    picks.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });
    picks
}

pub fn most_economical(groups: &[GroupStats]) -> Option<EconomicalPick> {
    rank_economical(groups).into_iter().next()
}

/// All groups scored for the "most profitable hotel" question, best first.
///
/// Visitor volume and margin both count as higher-is-better; the total is
/// the unweighted mean of the two.
pub fn rank_profitable(groups: &[GroupStats]) -> Vec<ProfitablePick> {
    let Some(visitors_range) = feature_range(groups, |g| g.total_visitors as f64) else {
        return Vec::new();
    };
    let Some(margin_range) = feature_range(groups, |g| g.avg_margin) else {
        return Vec::new();
    };

    let mut picks: Vec<ProfitablePick> = groups
        .iter()
        .map(|g| {
            let visitors_score = score(
                g.total_visitors as f64,
                visitors_range,
                Direction::HigherIsBetter,
            );
            let margin_score = score(g.avg_margin, margin_range, Direction::HigherIsBetter);
            ProfitablePick {
                group: g.clone(),
                total_score: composite(&[visitors_score, margin_score]),
                visitors_score,
                margin_score,
            }
        })
        .collect();
    picks.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });
    picks
}

pub fn most_profitable(groups: &[GroupStats]) -> Option<ProfitablePick> {
    rank_profitable(groups).into_iter().next()
}
