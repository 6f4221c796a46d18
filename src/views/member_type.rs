use std::collections::BTreeMap;

use crate::model::{Dataset, MemberType};
use crate::views::selection::{Breakdown, Series, SeriesLabel};
use crate::views::types::MemberTypeAge;
use crate::views::utility::mean;

/// Mean age of new and returning members per congress.
///
/// With an itemized breakdown each line is labelled `"{Category} ({MemberType})"`,
/// e.g. `"Democrat (New)"`; collapsed or unsplit lines carry the member type
/// alone.
pub fn new_vs_returning(data: &Dataset, breakdown: Option<&Breakdown>) -> Vec<MemberTypeAge> {
    let series = Series::resolve(breakdown);
    let mut ages: BTreeMap<(u32, MemberType, SeriesLabel), Vec<f64>> = BTreeMap::new();

    for member in data.members() {
        let Some(label) = series.label(member) else {
            continue;
        };
        ages.entry((member.congress, member.member_type, label))
            .or_default()
            .push(member.age_years);
    }

    ages.into_iter()
        .map(|((congress, member_type, label), values)| MemberTypeAge {
            congress,
            member_type,
            series: match label {
                SeriesLabel::Combined => member_type.to_string(),
                SeriesLabel::Category(category) => format!("{category} ({member_type})"),
            },
            average_age: mean(&values),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{dataset, member};
    use crate::model::{Chamber, Party};
    use crate::views::selection::Selection;

    fn sample() -> Dataset {
        dataset(vec![
            member(100, Chamber::House, "OH", 100, 40.0, 1, "Boomers"),
            member(100, Chamber::House, "OH", 100, 60.0, 5, "Silent"),
            member(100, Chamber::Senate, "OH", 200, 50.0, 1, "Boomers"),
            member(100, Chamber::Senate, "OH", 200, 70.0, 3, "Silent"),
            member(100, Chamber::House, "VT", 328, 99.0, 1, "Greatest"),
        ])
    }

    #[test]
    fn test_unsplit_groups_by_member_type_only() {
        let rows = new_vs_returning(&sample(), None);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].series, "New");
        assert!((rows[0].average_age - (40.0 + 50.0 + 99.0) / 3.0).abs() < 1e-9);
        assert_eq!(rows[1].series, "Returning");
        assert!((rows[1].average_age - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_combined_party_restricts_to_major_parties() {
        let breakdown = Breakdown::Party(vec![Selection::Combined]);
        let rows = new_vs_returning(&sample(), Some(&breakdown));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].member_type, MemberType::New);
        assert_eq!(rows[0].series, "New");
        assert!((rows[0].average_age - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_itemized_party_labels() {
        let breakdown = Breakdown::Party(vec![
            Selection::Category(Party::Democrat),
            Selection::Category(Party::Republican),
        ]);
        let rows = new_vs_returning(&sample(), Some(&breakdown));
        let labels: Vec<&str> = rows.iter().map(|r| r.series.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Democrat (New)",
                "Republican (New)",
                "Democrat (Returning)",
                "Republican (Returning)"
            ]
        );
    }

    #[test]
    fn test_itemized_chamber_labels() {
        let breakdown = Breakdown::Chamber(vec![Selection::Category(Chamber::House)]);
        let rows = new_vs_returning(&sample(), Some(&breakdown));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].series, "House (New)");
        assert!((rows[0].average_age - (40.0 + 99.0) / 2.0).abs() < 1e-9);
        assert_eq!(rows[1].series, "House (Returning)");
    }
}
