use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::model::Dataset;
use crate::views::types::GenerationShare;
use crate::views::utility::{mean, pct};

/// Generation labels oldest first, as the dataset spells them.
pub const GENERATIONS: &[&str] = &[
    "Gilded",
    "Progressive",
    "Missionary",
    "Lost",
    "Greatest",
    "Silent",
    "Boomers",
    "Gen X",
    "Millennial",
    "Gen Z",
];

/// Orders generation labels by cohort; labels outside [`GENERATIONS`] sort
/// after every known cohort, alphabetically.
pub fn cmp_generations(a: &str, b: &str) -> Ordering {
    let rank = |label: &str| GENERATIONS.iter().position(|g| *g == label).unwrap_or(usize::MAX);
    rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
}

/// Generational make-up of every congress, in long form.
///
/// Emits one row per congress for every generation label found anywhere in
/// the dataset, so a generation missing from a congress shows up with a zero
/// count, 0% and no average age. Percentages within a congress sum to 100.
pub fn generation_composition(data: &Dataset) -> Vec<GenerationShare> {
    let mut ages: HashMap<(u32, &str), Vec<f64>> = HashMap::new();
    let mut totals: BTreeMap<u32, usize> = BTreeMap::new();
    let mut labels: BTreeSet<&str> = BTreeSet::new();

    for member in data.members() {
        ages.entry((member.congress, member.generation.as_str()))
            .or_default()
            .push(member.age_years);
        *totals.entry(member.congress).or_default() += 1;
        labels.insert(member.generation.as_str());
    }

    let mut generations: Vec<&str> = labels.into_iter().collect();
    generations.sort_by(|a, b| cmp_generations(a, b));

    let mut rows = Vec::with_capacity(totals.len() * generations.len());
    for (congress, total) in totals {
        for generation in &generations {
            let values = ages.get(&(congress, *generation));
            let count = values.map_or(0, Vec::len);
            rows.push(GenerationShare {
                congress,
                generation: generation.to_string(),
                count,
                percentage: pct(count, total),
                average_age: values.map(|v| mean(v)),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chamber;
    use crate::model::fixtures::{dataset, member};

    fn sample() -> Dataset {
        dataset(vec![
            member(90, Chamber::House, "NY", 100, 70.0, 10, "Lost"),
            member(90, Chamber::House, "NY", 100, 50.0, 2, "Greatest"),
            member(90, Chamber::House, "NY", 200, 54.0, 3, "Greatest"),
            member(118, Chamber::Senate, "GA", 100, 36.0, 1, "Millennial"),
            member(118, Chamber::House, "FL", 100, 26.0, 1, "Gen Z"),
            member(118, Chamber::House, "TX", 200, 60.0, 4, "Boomers"),
        ])
    }

    #[test]
    fn test_percentages_sum_to_one_hundred_per_congress() {
        let rows = generation_composition(&sample());

        for congress in [90, 118] {
            let total: f64 = rows
                .iter()
                .filter(|r| r.congress == congress)
                .map(|r| r.percentage)
                .sum();
            assert!((total - 100.0).abs() < 1e-9, "congress {congress} sums to {total}");
        }
    }

    #[test]
    fn test_absent_generation_reported_as_zero() {
        let rows = generation_composition(&sample());

        // 5 distinct labels, 2 congresses
        assert_eq!(rows.len(), 10);
        let lost_118 = rows
            .iter()
            .find(|r| r.congress == 118 && r.generation == "Lost")
            .unwrap();
        assert_eq!(lost_118.count, 0);
        assert_eq!(lost_118.percentage, 0.0);
        assert_eq!(lost_118.average_age, None);
    }

    #[test]
    fn test_share_and_average_age() {
        let rows = generation_composition(&sample());
        let greatest_90 = rows
            .iter()
            .find(|r| r.congress == 90 && r.generation == "Greatest")
            .unwrap();

        assert_eq!(greatest_90.count, 2);
        assert!((greatest_90.percentage - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(greatest_90.average_age, Some(52.0));
    }

    #[test]
    fn test_rows_ordered_by_congress_then_cohort() {
        let rows = generation_composition(&sample());
        let first_five: Vec<&str> = rows[..5].iter().map(|r| r.generation.as_str()).collect();

        assert!(rows[..5].iter().all(|r| r.congress == 90));
        assert_eq!(first_five, vec!["Lost", "Greatest", "Boomers", "Millennial", "Gen Z"]);
    }

    #[test]
    fn test_unknown_generation_sorts_last() {
        assert_eq!(cmp_generations("Silent", "Boomers"), Ordering::Less);
        assert_eq!(cmp_generations("Unlabelled", "Gen Z"), Ordering::Greater);
        assert_eq!(cmp_generations("Alpha", "Beta"), Ordering::Less);
    }
}
