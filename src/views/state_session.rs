use std::collections::BTreeMap;

use crate::model::{Chamber, Dataset};
use crate::views::types::StateSessionAverage;
use crate::views::utility::mean;

#[derive(Default)]
struct StateBucket {
    ages: Vec<f64>,
    house: usize,
    senate: usize,
}

/// Mean age per (state, congress) with House and Senate head-counts, the
/// table behind the animated choropleth.
///
/// A state with no members in one chamber gets a zero count for it rather
/// than being dropped. Rows are ordered by congress, then state.
pub fn state_session_averages(data: &Dataset) -> Vec<StateSessionAverage> {
    let mut buckets: BTreeMap<(u32, &str), StateBucket> = BTreeMap::new();

    for member in data.members() {
        let bucket = buckets
            .entry((member.congress, member.state_abbrev.as_str()))
            .or_default();
        bucket.ages.push(member.age_years);
        match member.chamber {
            Chamber::House => bucket.house += 1,
            Chamber::Senate => bucket.senate += 1,
        }
    }

    buckets
        .into_iter()
        .map(|((congress, state), bucket)| StateSessionAverage {
            congress,
            state_abbrev: state.to_string(),
            average_age: mean(&bucket.ages),
            number_of_house: bucket.house,
            number_of_senate: bucket.senate,
        })
        .collect()
}
