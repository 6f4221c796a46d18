use crate::model::{Chamber, Dataset, MemberSession};

/// Lower bound of the age slider.
pub const AGE_RANGE_MIN: f64 = 20.0;
/// Upper bound of the age slider.
pub const AGE_RANGE_MAX: f64 = 100.0;

/// Current state of the table's filter controls. `None` is the "Default"
/// dropdown entry and leaves that field unconstrained.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub congress: Option<u32>,
    pub chamber: Option<Chamber>,
    pub state: Option<String>,
    pub party: Option<i64>,
    /// Inclusive `(min, max)` age bounds in years.
    pub age_range: (f64, f64),
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            congress: None,
            chamber: None,
            state: None,
            party: None,
            age_range: (AGE_RANGE_MIN, AGE_RANGE_MAX),
        }
    }
}

impl FilterSelection {
    pub fn matches(&self, member: &MemberSession) -> bool {
        let (min, max) = self.age_range;
        self.congress.is_none_or(|c| member.congress == c)
            && self.chamber.is_none_or(|c| member.chamber == c)
            && self.state.as_deref().is_none_or(|s| member.state_abbrev == s)
            && self.party.is_none_or(|p| member.party_code == p)
            && member.age_years >= min
            && member.age_years <= max
    }
}

/// Rows of the data table that pass `selection`, in dataset order.
/// Matching nothing is a valid, empty result.
pub fn filter_members<'a>(data: &'a Dataset, selection: &FilterSelection) -> Vec<&'a MemberSession> {
    data.members()
        .iter()
        .filter(|member| selection.matches(member))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{dataset, member};

    fn sample() -> Dataset {
        dataset(vec![
            member(117, Chamber::Senate, "VT", 328, 80.0, 16, "Silent"),
            member(117, Chamber::House, "NY", 100, 32.0, 2, "Millennial"),
            member(118, Chamber::House, "NY", 100, 34.0, 3, "Millennial"),
            member(118, Chamber::Senate, "KY", 200, 81.0, 19, "Silent"),
        ])
    }

    #[test]
    fn test_default_selection_returns_everything_in_order() {
        let data = sample();
        let rows = filter_members(&data, &FilterSelection::default());

        assert_eq!(rows.len(), 4);
        for (row, original) in rows.iter().zip(data.members()) {
            assert_eq!(*row, original);
        }
    }

    #[test]
    fn test_each_field_constrains() {
        let data = sample();
        let selection = FilterSelection {
            congress: Some(118),
            chamber: Some(Chamber::House),
            state: Some("NY".to_string()),
            party: Some(100),
            ..Default::default()
        };

        let rows = filter_members(&data, &selection);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].congress, 118);
        assert_eq!(rows[0].age_years, 34.0);
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let data = sample();
        let selection = FilterSelection {
            age_range: (34.0, 80.0),
            ..Default::default()
        };

        let ages: Vec<f64> = filter_members(&data, &selection)
            .iter()
            .map(|m| m.age_years)
            .collect();

        assert_eq!(ages, vec![80.0, 34.0]);
    }

    #[test]
    fn test_unmatched_party_returns_empty() {
        let data = sample();
        let selection = FilterSelection {
            party: Some(29),
            ..Default::default()
        };

        assert!(filter_members(&data, &selection).is_empty());
    }
}
