use inflam_data::InflammationTable;
use inflam_stats::{daily_above_threshold, daily_max, daily_mean, daily_min, DailyStatistics};
use proptest::prelude::*;

fn table_strategy() -> impl Strategy<Value = InflammationTable> {
    (1usize..8, 1usize..12)
        .prop_flat_map(|(patients, days)| {
            prop::collection::vec(prop::collection::vec(-100.0f64..100.0, days), patients)
        })
        .prop_map(|rows| InflammationTable::from_rows(rows).expect("rectangular rows"))
}

proptest! {
    #[test]
    fn mean_is_column_average(t in table_strategy()) {
        let mean = daily_mean(&t);
        prop_assert_eq!(mean.len(), t.n_days());
        for (day, m) in mean.iter().enumerate() {
            let column = t.view().column(day).to_vec();
            let expected = column.iter().sum::<f64>() / column.len() as f64;
            prop_assert!((m - expected).abs() < 1e-9, "day {}: {} vs {}", day, m, expected);
        }
    }

    #[test]
    fn max_and_min_are_taken_from_the_column(t in table_strategy()) {
        let max = daily_max(&t);
        let min = daily_min(&t);
        prop_assert_eq!(max.len(), t.n_days());
        prop_assert_eq!(min.len(), t.n_days());
        for day in 0..t.n_days() {
            let column = t.view().column(day).to_vec();
            prop_assert!(column.contains(&max[day]));
            prop_assert!(column.contains(&min[day]));
            prop_assert!(column.iter().all(|&v| min[day] <= v && v <= max[day]));
        }
    }

    #[test]
    fn mean_lies_between_min_and_max(t in table_strategy()) {
        let stats = DailyStatistics::compute(&t);
        for day in 0..stats.n_days() {
            prop_assert!(stats.min[day] <= stats.average[day] + 1e-9);
            prop_assert!(stats.average[day] <= stats.max[day] + 1e-9);
            prop_assert!(stats.std_dev[day] >= 0.0);
        }
    }

    #[test]
    fn exceedance_count_does_not_grow_with_threshold(
        t in table_strategy(),
        pick in any::<prop::sample::Index>(),
        a in -150.0f64..150.0,
        b in -150.0f64..150.0,
    ) {
        let patient = pick.index(t.n_patients());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let at_lo = daily_above_threshold(&t, lo, patient).unwrap();
        let at_hi = daily_above_threshold(&t, hi, patient).unwrap();
        prop_assert!(at_hi <= at_lo);
        prop_assert!(at_lo <= t.n_days());
    }

    #[test]
    fn any_index_past_the_end_fails(t in table_strategy(), extra in 0usize..5) {
        let index = t.n_patients() + extra;
        prop_assert!(daily_above_threshold(&t, 0.0, index).is_err());
    }
}
