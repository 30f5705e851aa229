//! Turns a category's visible entries into its leaderboard.
//!
//! Weight categories rank single catches. Points categories rank one
//! aggregate per fisherman whose value is the sum of all their entries.
//! Either way the result is capped at the category limit unless the caller
//! asks for everything.

use std::{cmp::Ordering, collections::BTreeMap};

use crate::{Category, Entry, ScoringType};

pub fn rank(category: &Category, entries: Vec<Entry>, ignore_limit: bool) -> Vec<Entry> {
    let mut ranked = match category.scoring {
        ScoringType::Weight => entries,
        ScoringType::Points => aggregate(entries),
    };

    ranked.sort_by(leaderboard_order);

    if !ignore_limit {
        ranked.truncate(category.limit as usize);
    }

    ranked
}

/// Collapse entries into one per fisherman. The aggregate takes its identity
/// from the fisherman's latest entry (highest id when timestamps tie).
fn aggregate(entries: Vec<Entry>) -> Vec<Entry> {
    let mut tallies: BTreeMap<i32, (f64, Entry)> = BTreeMap::new();

    for entry in entries {
        match tallies.get_mut(&entry.fisherman_id) {
            Some((total, representative)) => {
                *total += entry.value;
                if (entry.date, entry.id) > (representative.date, representative.id) {
                    *representative = entry;
                }
            }
            None => {
                tallies.insert(entry.fisherman_id, (entry.value, entry));
            }
        }
    }

    tallies
        .into_values()
        .map(|(total, mut representative)| {
            representative.value = total;
            representative
        })
        .collect()
}

/// Highest value first, earlier catch on a tie, then lowest id.
fn leaderboard_order(a: &Entry, b: &Entry) -> Ordering {
    b.value
        .total_cmp(&a.value)
        .then_with(|| a.date.cmp(&b.date))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use approx::assert_ulps_eq;
    use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
    use test_case::test_case;

    use super::*;

    fn at(minute: i64) -> DateTime<FixedOffset> {
        (Utc.with_ymd_and_hms(2024, 3, 9, 6, 0, 0).unwrap() + Duration::minutes(minute)).into()
    }

    fn category(scoring: ScoringType, limit: u32) -> Category {
        Category {
            id: 1,
            tournament_id: 1,
            name: "Dorado".to_string(),
            scoring,
            limit,
            created_at: at(0),
        }
    }

    fn entry(id: i32, fisherman_id: i32, value: f64, minute: i64) -> Entry {
        Entry {
            id,
            tournament_id: 1,
            category_id: 1,
            fisherman_id,
            boat_id: 10 + fisherman_id,
            value,
            witness: None,
            date: at(minute),
        }
    }

    fn values(entries: &[Entry]) -> Vec<(f64, DateTime<FixedOffset>)> {
        entries.iter().map(|entry| (entry.value, entry.date)).collect()
    }

    #[test]
    fn weight_ties_go_to_the_earlier_catch() {
        let entries = vec![
            entry(1, 1, 5.0, 1),
            entry(2, 2, 9.0, 2),
            entry(3, 3, 9.0, 1),
            entry(4, 4, 3.0, 3),
        ];

        let ranked = rank(&category(ScoringType::Weight, 2), entries, false);

        assert_eq!(values(&ranked), vec![(9.0, at(1)), (9.0, at(2))]);
        assert_eq!(ranked[0].id, 3);
    }

    #[test]
    fn weight_keeps_every_catch_of_a_fisherman() {
        let entries = vec![entry(1, 1, 4.0, 1), entry(2, 1, 6.5, 2), entry(3, 2, 5.0, 3)];

        let ranked = rank(&category(ScoringType::Weight, 3), entries, false);

        let ids: Vec<_> = ranked.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn weight_ties_on_value_and_date_fall_back_to_id() {
        let entries = vec![entry(8, 1, 2.0, 5), entry(6, 2, 2.0, 5)];

        let ranked = rank(&category(ScoringType::Weight, 5), entries, false);

        assert_eq!(ranked[0].id, 6);
        assert_eq!(ranked[1].id, 8);
    }

    #[test]
    fn points_are_summed_per_fisherman() {
        let entries = vec![entry(1, 1, 3.0, 1), entry(2, 1, 4.0, 2), entry(3, 2, 5.0, 3)];

        let ranked = rank(&category(ScoringType::Points, 1), entries, false);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].fisherman_id, 1);
        assert_ulps_eq!(ranked[0].value, 7.0);
    }

    #[test]
    fn points_representative_is_the_latest_entry() {
        let mut late = entry(2, 1, 1.0, 30);
        late.witness = Some("Rosa".to_string());
        let entries = vec![entry(5, 1, 2.0, 10), late, entry(1, 1, 4.0, 20)];

        let ranked = rank(&category(ScoringType::Points, 1), entries, false);

        assert_eq!(ranked[0].id, 2);
        assert_eq!(ranked[0].date, at(30));
        assert_eq!(ranked[0].witness.as_deref(), Some("Rosa"));
    }

    #[test]
    fn points_representative_tie_goes_to_the_highest_id() {
        let entries = vec![entry(4, 1, 1.0, 10), entry(9, 1, 1.0, 10), entry(7, 1, 1.0, 10)];

        let ranked = rank(&category(ScoringType::Points, 1), entries, false);

        assert_eq!(ranked[0].id, 9);
        assert_ulps_eq!(ranked[0].value, 3.0);
    }

    #[test]
    fn points_ties_go_to_the_earlier_representative() {
        let entries = vec![
            entry(1, 1, 2.0, 1),
            entry(2, 1, 3.0, 40),
            entry(3, 2, 5.0, 20),
        ];

        let ranked = rank(&category(ScoringType::Points, 2), entries, false);

        let fishermen: Vec<_> = ranked.iter().map(|entry| entry.fisherman_id).collect();
        assert_eq!(fishermen, vec![2, 1]);
    }

    #[test]
    fn points_totals_match_input_sums() {
        let entries = vec![
            entry(1, 1, 0.5, 1),
            entry(2, 2, 1.25, 2),
            entry(3, 1, 2.0, 3),
            entry(4, 3, 7.0, 4),
            entry(5, 2, 0.75, 5),
            entry(6, 1, 1.5, 6),
        ];
        let mut expected: HashMap<i32, f64> = HashMap::new();
        for entry in &entries {
            *expected.entry(entry.fisherman_id).or_default() += entry.value;
        }

        let ranked = rank(&category(ScoringType::Points, 0), entries, true);

        assert_eq!(ranked.len(), expected.len());
        for aggregate in &ranked {
            assert_ulps_eq!(aggregate.value, expected[&aggregate.fisherman_id]);
        }
        assert!(ranked.windows(2).all(|pair| pair[0].value >= pair[1].value));
    }

    #[test_case(ScoringType::Weight, 3, false, 3 ; "weight capped")]
    #[test_case(ScoringType::Weight, 10, false, 6 ; "weight limit above count")]
    #[test_case(ScoringType::Weight, 3, true, 6 ; "weight ignoring limit")]
    #[test_case(ScoringType::Weight, 0, false, 0 ; "weight zero limit")]
    #[test_case(ScoringType::Points, 2, false, 2 ; "points capped")]
    #[test_case(ScoringType::Points, 10, false, 3 ; "points limit above count")]
    #[test_case(ScoringType::Points, 1, true, 3 ; "points ignoring limit")]
    fn result_length(scoring: ScoringType, limit: u32, ignore_limit: bool, expected: usize) {
        let entries = (1..=6)
            .map(|id| entry(id, id % 3, f64::from(id), i64::from(id)))
            .collect();

        let ranked = rank(&category(scoring, limit), entries, ignore_limit);

        assert_eq!(ranked.len(), expected);
    }

    #[test_case(ScoringType::Weight ; "weight")]
    #[test_case(ScoringType::Points ; "points")]
    fn empty_input_is_an_empty_leaderboard(scoring: ScoringType) {
        assert!(rank(&category(scoring, 3), Vec::new(), false).is_empty());
    }
}
