//! Series selection shared by the line-chart views.
//!
//! A chart's dropdown offers `Combined` plus one entry per category. Picking
//! only `Combined` draws a single line over every qualifying record; any
//! other selection draws one line per selected category.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::model::{Chamber, MemberSession, Party};

pub const COMBINED: &str = "Combined";

/// One entry of a series dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    Combined,
    Category(T),
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Combined => f.write_str(COMBINED),
            Selection::Category(category) => category.fmt(f),
        }
    }
}

impl<T: FromStr<Err = String>> FromStr for Selection<T> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == COMBINED {
            Ok(Selection::Combined)
        } else {
            s.parse().map(Selection::Category)
        }
    }
}

/// How a selection resolves into series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grouping<T> {
    /// A single series over every qualifying record.
    Combined,
    /// One series per category; may be empty.
    Itemized(BTreeSet<T>),
}

/// Resolves a dropdown selection. `Combined` alone collapses; otherwise the
/// selected categories are itemized and any `Combined` entry is ignored.
pub fn grouping<T: Ord + Copy>(selection: &[Selection<T>]) -> Grouping<T> {
    if !selection.is_empty() && selection.iter().all(|s| *s == Selection::Combined) {
        return Grouping::Combined;
    }
    Grouping::Itemized(
        selection
            .iter()
            .filter_map(|s| match s {
                Selection::Combined => None,
                Selection::Category(category) => Some(*category),
            })
            .collect(),
    )
}

/// The category dimension a line chart is split along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breakdown {
    /// Major parties only; members of other parties never qualify.
    Party(Vec<Selection<Party>>),
    Chamber(Vec<Selection<Chamber>>),
}

/// A resolved breakdown: which members qualify and which label each one
/// carries. `None` from [`Series::label`] drops the member.
pub(crate) enum Series {
    All,
    Party(Grouping<Party>),
    Chamber(Grouping<Chamber>),
}

impl Series {
    pub(crate) fn resolve(breakdown: Option<&Breakdown>) -> Self {
        match breakdown {
            None => Series::All,
            Some(Breakdown::Party(selection)) => Series::Party(grouping(selection)),
            Some(Breakdown::Chamber(selection)) => Series::Chamber(grouping(selection)),
        }
    }

    /// The series `member` is plotted in.
    pub(crate) fn label(&self, member: &MemberSession) -> Option<SeriesLabel> {
        match self {
            Series::All => Some(SeriesLabel::Combined),
            Series::Party(grouping) => {
                let party = Party::from_code(member.party_code)?;
                match grouping {
                    Grouping::Combined => Some(SeriesLabel::Combined),
                    Grouping::Itemized(parties) => parties
                        .contains(&party)
                        .then(|| SeriesLabel::Category(party.to_string())),
                }
            }
            Series::Chamber(grouping) => match grouping {
                Grouping::Combined => Some(SeriesLabel::Combined),
                Grouping::Itemized(chambers) => chambers
                    .contains(&member.chamber)
                    .then(|| SeriesLabel::Category(member.chamber.to_string())),
            },
        }
    }
}

/// Ordering key for a series: the combined line first, then categories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SeriesLabel {
    Combined,
    Category(String),
}

impl SeriesLabel {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            SeriesLabel::Combined => COMBINED,
            SeriesLabel::Category(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_alone_collapses() {
        let selection: [Selection<Party>; 1] = [Selection::Combined];
        assert_eq!(grouping(&selection), Grouping::Combined);
    }

    #[test]
    fn test_mixed_selection_ignores_combined() {
        let selection = [Selection::Combined, Selection::Category(Party::Republican)];
        assert_eq!(
            grouping(&selection),
            Grouping::Itemized(BTreeSet::from([Party::Republican]))
        );
    }

    #[test]
    fn test_empty_selection_itemizes_nothing() {
        let selection: [Selection<Chamber>; 0] = [];
        assert_eq!(grouping(&selection), Grouping::Itemized(BTreeSet::new()));
    }

    #[test]
    fn test_selection_from_str() {
        assert_eq!("Combined".parse::<Selection<Party>>(), Ok(Selection::Combined));
        assert_eq!(
            "House".parse::<Selection<Chamber>>(),
            Ok(Selection::Category(Chamber::House))
        );
        assert!("Whig".parse::<Selection<Party>>().is_err());
    }
}
