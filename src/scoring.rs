// Min-max normalization scoring, generic over the population shape.
//
// A feature is anything a selector can pull out of an item as f64. Scores
// are on a 0..=100 scale; direction decides which end of the range is the
// "good" one.

/// Observed spread of one feature across a population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    /// Every item carries the identical value; normalization is undefined.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Single pass min/max of `selector(item)` over the population.
/// Returns `None` for an empty population; guarding that is the caller's job.
pub fn feature_range<T, F>(items: &[T], selector: F) -> Option<FeatureRange>
where
    F: Fn(&T) -> f64,
{
    let mut iter = items.iter().map(&selector);
    let first = iter.next()?;
    let (mut min, mut max) = (first, first);
    for v in iter {
        min = min.min(v);
        max = max.max(v);
    }
    Some(FeatureRange { min, max })
}

/// Linear min-max score of `value` within `range`, directional.
///
/// A degenerate range returns a fixed neutral 50.0 for any value and either
/// direction; that avoids the zero division without biasing one candidate.
pub fn score(value: f64, range: FeatureRange, direction: Direction) -> f64 {
    if range.is_degenerate() {
        return 50.0;
    }
    let normalized = (value - range.min) / (range.max - range.min) * 100.0;
    match direction {
        Direction::HigherIsBetter => normalized,
        Direction::LowerIsBetter => 100.0 - normalized,
    }
}

/// Unweighted arithmetic mean of several per-feature scores.
pub fn composite(scores: &[f64]) -> f64 {
    crate::util::average(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_ordered_and_singleton_collapses() {
        let r = feature_range(&[3.0, 1.0, 2.0], |v| *v).unwrap();
        assert_eq!(r.min, 1.0);
        assert_eq!(r.max, 3.0);
        assert!(r.min <= r.max);

        let single = feature_range(&[7.0], |v| *v).unwrap();
        assert_eq!(single.min, single.max);
        assert!(single.is_degenerate());
    }

    #[test]
    fn empty_population_has_no_range() {
        let empty: [f64; 0] = [];
        assert!(feature_range(&empty, |v| *v).is_none());
    }

    #[test]
    fn endpoints_map_to_zero_and_hundred() {
        let r = FeatureRange { min: 10.0, max: 30.0 };
        assert_eq!(score(10.0, r, Direction::HigherIsBetter), 0.0);
        assert_eq!(score(30.0, r, Direction::HigherIsBetter), 100.0);
        assert_eq!(score(20.0, r, Direction::HigherIsBetter), 50.0);
    }

    #[test]
    fn directions_invert_around_the_scale() {
        let r = FeatureRange { min: 0.0, max: 4.0 };
        for v in [0.0, 1.0, 2.5, 4.0] {
            let up = score(v, r, Direction::HigherIsBetter);
            let down = score(v, r, Direction::LowerIsBetter);
            assert!((up + down - 100.0).abs() < 1e-12);
        }
    }

    #[test]
    fn degenerate_range_is_neutral_for_any_value() {
        let r = FeatureRange { min: 5.0, max: 5.0 };
        assert_eq!(score(5.0, r, Direction::HigherIsBetter), 50.0);
        assert_eq!(score(-3.0, r, Direction::LowerIsBetter), 50.0);
        assert_eq!(score(1e9, r, Direction::HigherIsBetter), 50.0);
    }

    #[test]
    fn composite_is_a_plain_mean() {
        assert_eq!(composite(&[0.0, 100.0]), 50.0);
        assert_eq!(composite(&[30.0, 60.0, 90.0]), 60.0);
    }
}
