use std::collections::BTreeSet;

use crate::model::Dataset;
use crate::views::types::FilterOptions;

/// The dropdown entry meaning "no constraint on this field".
pub const DEFAULT_OPTION: &str = "Default";

/// Distinct, sorted values for each filter dropdown. [`DEFAULT_OPTION`] is
/// not included; front ends list it first.
pub fn filter_options(data: &Dataset) -> FilterOptions {
    let mut congresses = BTreeSet::new();
    let mut chambers = BTreeSet::new();
    let mut states = BTreeSet::new();
    let mut party_codes = BTreeSet::new();

    for member in data.members() {
        congresses.insert(member.congress);
        chambers.insert(member.chamber);
        states.insert(member.state_abbrev.clone());
        party_codes.insert(member.party_code);
    }

    FilterOptions {
        congresses: congresses.into_iter().collect(),
        chambers: chambers.into_iter().collect(),
        states: states.into_iter().collect(),
        party_codes: party_codes.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chamber;
    use crate::model::fixtures::{dataset, member};

    #[test]
    fn test_filter_options_sorted_and_distinct() {
        let data = dataset(vec![
            member(118, Chamber::Senate, "VT", 328, 80.0, 16, "Silent"),
            member(117, Chamber::Senate, "AK", 200, 50.0, 2, "Gen X"),
            member(118, Chamber::Senate, "AK", 200, 52.0, 3, "Gen X"),
        ]);

        let options = filter_options(&data);

        assert_eq!(options.congresses, vec![117, 118]);
        assert_eq!(options.chambers, vec![Chamber::Senate]);
        assert_eq!(options.states, vec!["AK".to_string(), "VT".to_string()]);
        assert_eq!(options.party_codes, vec![200, 328]);
    }
}
