//! Row types produced by the aggregation views.
//!
//! Every view returns a `Vec` of one of these, already sorted by its group
//! keys, ready to be written as CSV or JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Chamber, MemberType};

/// Mean age and chamber head-counts for one state in one congress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSessionAverage {
    pub congress: u32,
    pub state_abbrev: String,
    pub average_age: f64,
    pub number_of_house: usize,
    pub number_of_senate: usize,
}

/// One generation's share of one congress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationShare {
    pub congress: u32,
    pub generation: String,
    pub count: usize,
    pub percentage: f64,
    /// `None` when the generation has no members in this congress.
    pub average_age: Option<f64>,
}

/// A point on an average-age line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeTrendPoint {
    pub congress: u32,
    pub series: String,
    pub average_age: f64,
}

/// A point on the new-vs-returning line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberTypeAge {
    pub congress: u32,
    pub member_type: MemberType,
    pub series: String,
    pub average_age: f64,
}

/// One bar of the age distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Distinct values available to each filter control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub congresses: Vec<u32>,
    pub chambers: Vec<Chamber>,
    pub states: Vec<String>,
    pub party_codes: Vec<i64>,
}

/// Entry in the export index.
#[derive(Debug, Serialize)]
pub struct ExportEntry {
    pub view: String,
    pub file: String,
    pub rows: usize,
}

/// Index of every table written by an export, served as `index.json`.
#[derive(Debug, Serialize)]
pub struct ExportIndex {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub members: usize,
    pub views: Vec<ExportEntry>,
}
