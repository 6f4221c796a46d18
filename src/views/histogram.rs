use crate::model::Dataset;
use crate::views::types::AgeBin;

pub const DEFAULT_BINS: usize = 50;

/// Age distribution as `bins` equal-width bins spanning the youngest to the
/// oldest member. Each bin is half-open except the last, which also holds
/// the maximum. Empty data or zero bins give no bins.
pub fn age_histogram(data: &Dataset, bins: usize) -> Vec<AgeBin> {
    let ages: Vec<f64> = data.members().iter().map(|m| m.age_years).collect();
    if ages.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = ages.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min { (max - min) / bins as f64 } else { 1.0 };

    let mut counts = vec![0usize; bins];
    for age in ages {
        let idx = (((age - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| AgeBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}
