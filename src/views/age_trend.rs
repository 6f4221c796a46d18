use std::collections::BTreeMap;

use crate::model::Dataset;
use crate::views::selection::{Breakdown, Series, SeriesLabel};
use crate::views::types::AgeTrendPoint;
use crate::views::utility::mean;

/// Mean member age per congress, optionally split by party or chamber.
///
/// A collapsed (`Combined`) series averages every qualifying record at once,
/// so it is weighted by head-count rather than being a mean of the
/// per-category means.
pub fn average_age_over_time(data: &Dataset, breakdown: Option<&Breakdown>) -> Vec<AgeTrendPoint> {
    let series = Series::resolve(breakdown);
    let mut ages: BTreeMap<(u32, SeriesLabel), Vec<f64>> = BTreeMap::new();

    for member in data.members() {
        let Some(label) = series.label(member) else {
            continue;
        };
        ages.entry((member.congress, label))
            .or_default()
            .push(member.age_years);
    }

    ages.into_iter()
        .map(|((congress, label), values)| AgeTrendPoint {
            congress,
            series: label.as_str().to_string(),
            average_age: mean(&values),
        })
        .collect()
}
