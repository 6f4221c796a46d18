//! Typed records for the congressional demographics dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Display name returned for party codes missing from the lookup table.
pub const UNKNOWN_PARTY: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    pub const ALL: [Chamber; 2] = [Chamber::House, Chamber::Senate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chamber::House => "House",
            Chamber::Senate => "Senate",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chamber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "House" => Ok(Chamber::House),
            "Senate" => Ok(Chamber::Senate),
            other => Err(format!("unknown chamber '{other}' (expected House or Senate)")),
        }
    }
}

/// The two major parties, the only ones the party breakdowns chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Party {
    Democrat,
    Republican,
}

impl Party {
    pub const ALL: [Party; 2] = [Party::Democrat, Party::Republican];

    /// Voteview party code.
    pub fn code(&self) -> i64 {
        match self {
            Party::Democrat => 100,
            Party::Republican => 200,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Democrat => "Democrat",
            Party::Republican => "Republican",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Party {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Democrat" => Ok(Party::Democrat),
            "Republican" => Ok(Party::Republican),
            other => Err(format!("unknown party '{other}' (expected Democrat or Republican)")),
        }
    }
}

/// Whether a member is serving a first congress or has served before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemberType {
    New,
    Returning,
}

impl MemberType {
    /// `New` iff this is the member's first congress.
    pub fn classify(cmltv_cong: u32) -> Self {
        if cmltv_cong == 1 {
            MemberType::New
        } else {
            MemberType::Returning
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberType::New => "New",
            MemberType::Returning => "Returning",
        }
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One legislator in one congress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberSession {
    pub congress: u32,
    pub start_date: NaiveDate,
    pub chamber: Chamber,
    pub state_abbrev: String,
    pub party_code: i64,
    pub bioname: String,
    pub bioguide_id: String,
    pub birthday: NaiveDate,
    pub cmltv_cong: u32,
    pub cmltv_chamber: u32,
    pub age_days: f64,
    pub age_years: f64,
    pub generation: String,
    pub member_type: MemberType,
}

impl MemberSession {
    /// The member's name in "First Last" order, as encyclopedias title pages.
    pub fn display_name(&self) -> String {
        display_name(&self.bioname)
    }
}

/// Reorders a stored `"LAST, First"` bioname into `"First Last"`.
///
/// The surname is recased word by word (`"BYRD"` becomes `"Byrd"`,
/// `"OCASIO-CORTEZ"` becomes `"Ocasio-Cortez"`). A mixed-case prefix the
/// dataset already spells out is kept, so `"McCONNELL"` becomes
/// `"McConnell"`. Names without a comma are returned trimmed but otherwise
/// untouched.
pub fn display_name(bioname: &str) -> String {
    let name = bioname.trim();
    match name.split_once(", ") {
        Some((last, first)) => format!("{} {}", first.trim(), capitalize(last.trim())),
        None => name.to_string(),
    }
}

fn capitalize(surname: &str) -> String {
    let mut out = String::with_capacity(surname.len());
    let mut word = String::new();
    for c in surname.chars() {
        if matches!(c, ' ' | '-' | '\'') {
            out.push_str(&recase_word(&word));
            word.clear();
            out.push(c);
        } else {
            word.push(c);
        }
    }
    out.push_str(&recase_word(&word));
    out
}

/// Everything up to the last lowercase letter is kept as written; the
/// remaining tail gets an initial capital and is lowercased.
fn recase_word(word: &str) -> String {
    let split = word
        .char_indices()
        .filter(|(_, c)| c.is_lowercase())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    let (prefix, tail) = word.split_at(split);

    let mut out = prefix.to_string();
    let mut chars = tail.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
    out
}

/// Party code to display name mapping.
#[derive(Debug, Clone, Default)]
pub struct PartyLookup {
    names: HashMap<i64, String>,
}

impl PartyLookup {
    pub fn new(names: HashMap<i64, String>) -> Self {
        Self { names }
    }

    /// Resolves `code`, falling back to [`UNKNOWN_PARTY`].
    pub fn name(&self, code: i64) -> &str {
        self.names.get(&code).map(String::as_str).unwrap_or(UNKNOWN_PARTY)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(i64, String)> for PartyLookup {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The loaded dataset. Built once at startup and only ever read afterwards;
/// every view takes it by reference.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    members: Vec<MemberSession>,
    parties: PartyLookup,
}

impl Dataset {
    pub fn new(members: Vec<MemberSession>, parties: PartyLookup) -> Self {
        Self { members, parties }
    }

    pub fn members(&self) -> &[MemberSession] {
        &self.members
    }

    pub fn parties(&self) -> &PartyLookup {
        &self.parties
    }

    /// Shorthand for `self.parties().name(code)`.
    pub fn party_name(&self, code: i64) -> &str {
        self.parties.name(code)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_type_classify() {
        assert_eq!(MemberType::classify(1), MemberType::New);
        assert_eq!(MemberType::classify(2), MemberType::Returning);
        assert_eq!(MemberType::classify(17), MemberType::Returning);
    }

    #[test]
    fn test_display_name_reorders_and_recases_surname() {
        assert_eq!(display_name("BYRD, Robert Carlyle"), "Robert Carlyle Byrd");
        assert_eq!(display_name("  PELOSI, Nancy "), "Nancy Pelosi");
        assert_eq!(display_name("OCASIO-CORTEZ, Alexandria"), "Alexandria Ocasio-Cortez");
        assert_eq!(display_name("O'ROURKE, Robert"), "Robert O'Rourke");
        assert_eq!(display_name("VAN HOLLEN, Chris"), "Chris Van Hollen");
    }

    #[test]
    fn test_display_name_keeps_mixed_case_prefix() {
        assert_eq!(
            display_name("McCONNELL, Addison Mitchell (Mitch)"),
            "Addison Mitchell (Mitch) McConnell"
        );
        assert_eq!(display_name("DeLAURO, Rosa L."), "Rosa L. DeLauro");
        assert_eq!(display_name("MacARTHUR, Thomas"), "Thomas MacArthur");
        assert_eq!(display_name("Smith, John"), "John Smith");
    }

    #[test]
    fn test_display_name_without_comma_is_untouched() {
        assert_eq!(display_name("Cher"), "Cher");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_party_lookup_unknown_code_returns_placeholder() {
        let lookup: PartyLookup = [(100, "Democrat".to_string())].into_iter().collect();
        assert_eq!(lookup.name(100), "Democrat");
        assert_eq!(lookup.name(9999), UNKNOWN_PARTY);
    }

    #[test]
    fn test_party_codes_round_trip() {
        for party in Party::ALL {
            assert_eq!(Party::from_code(party.code()), Some(party));
        }
        assert_eq!(Party::from_code(328), None);
    }

    #[test]
    fn test_chamber_from_str() {
        assert_eq!("Senate".parse::<Chamber>(), Ok(Chamber::Senate));
        assert!("senate".parse::<Chamber>().is_err());
    }

    #[test]
    fn test_dataset_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dataset>();
    }
}
