//! Startup loading of the member dataset and the party lookup table.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::fetch::{HttpClient, read_source};
use crate::model::{Chamber, Dataset, MemberSession, MemberType, PartyLookup};

/// Published FiveThirtyEight dataset the dashboard is built on.
pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/fivethirtyeight/data/refs/heads/master/congress-demographics/data_aging_congress.csv";

/// A single row of `data_aging_congress.csv`, before classification.
#[derive(Debug, Deserialize)]
struct MemberRow {
    congress: u32,
    start_date: NaiveDate,
    chamber: Chamber,
    state_abbrev: String,
    party_code: i64,
    bioname: String,
    bioguide_id: String,
    birthday: NaiveDate,
    cmltv_cong: u32,
    cmltv_chamber: u32,
    age_days: f64,
    age_years: f64,
    generation: String,
}

impl MemberRow {
    fn validate(&self) -> Result<(), String> {
        if !self.age_years.is_finite() || self.age_years < 0.0 {
            return Err(format!("age_years {} is not a valid age", self.age_years));
        }
        if self.cmltv_cong == 0 {
            return Err("cmltv_cong must be at least 1".to_string());
        }
        Ok(())
    }

    fn into_member(self) -> MemberSession {
        MemberSession {
            member_type: MemberType::classify(self.cmltv_cong),
            congress: self.congress,
            start_date: self.start_date,
            chamber: self.chamber,
            state_abbrev: self.state_abbrev,
            party_code: self.party_code,
            bioname: self.bioname,
            bioguide_id: self.bioguide_id,
            birthday: self.birthday,
            cmltv_cong: self.cmltv_cong,
            cmltv_chamber: self.cmltv_chamber,
            age_days: self.age_days,
            age_years: self.age_years,
            generation: self.generation,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PartyRow {
    #[serde(rename = "Party Code")]
    code: i64,
    #[serde(rename = "Party Name")]
    name: String,
}

/// Parses member CSV bytes, validating each row and attaching its
/// [`MemberType`].
///
/// # Errors
///
/// Returns [`FetchError::Csv`] for rows that do not deserialize and
/// [`FetchError::InvalidRecord`] for rows that fail validation.
pub fn parse_members(bytes: &[u8]) -> Result<Vec<MemberSession>, FetchError> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let mut members = Vec::new();

    for (idx, result) in rdr.deserialize::<MemberRow>().enumerate() {
        let row = result?;
        row.validate().map_err(|reason| FetchError::InvalidRecord {
            // header is line 1
            line: idx as u64 + 2,
            reason,
        })?;
        members.push(row.into_member());
    }

    Ok(members)
}

/// Parses the `Party Code,Party Name` lookup table.
pub fn parse_party_codes(bytes: &[u8]) -> Result<PartyLookup, FetchError> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let mut lookup = Vec::new();

    for result in rdr.deserialize::<PartyRow>() {
        let row = result?;
        lookup.push((row.code, row.name.trim().to_string()));
    }

    Ok(lookup.into_iter().collect())
}

/// Reads the party lookup table from a local file.
pub fn load_party_codes(path: impl AsRef<Path>) -> Result<PartyLookup, FetchError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_party_codes(&bytes)
}

/// Loads the member dataset from `source` (a URL or a local path) and the
/// party lookup from `party_codes_path`.
///
/// Any failure is fatal for the caller: no view can be served without data.
#[tracing::instrument(skip(client))]
pub async fn load_dataset<C: HttpClient>(
    client: &C,
    source: &str,
    party_codes_path: &str,
) -> Result<Dataset, FetchError> {
    let bytes = read_source(client, source).await?;
    debug!(bytes = bytes.len(), "Dataset bytes received, parsing");

    let members = parse_members(&bytes)?;
    let parties = load_party_codes(party_codes_path)?;

    info!(
        members = members.len(),
        parties = parties.len(),
        "Dataset loaded"
    );
    Ok(Dataset::new(members, parties))
}
