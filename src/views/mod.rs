//! Aggregation views over the loaded [`Dataset`](crate::model::Dataset).
//!
//! Each view is a pure function of the dataset (plus, for some, a small
//! selection) returning freshly built rows. Nothing here holds state, so
//! views can be called from any number of threads at once.

pub mod age_trend;
pub mod filter;
pub mod generation;
pub mod histogram;
pub mod member_type;
pub mod options;
pub mod selection;
pub mod state_session;
pub mod types;
pub mod utility;

pub use age_trend::average_age_over_time;
pub use filter::{FilterSelection, filter_members};
pub use generation::generation_composition;
pub use histogram::age_histogram;
pub use member_type::new_vs_returning;
pub use options::filter_options;
pub use selection::{Breakdown, Selection};
pub use state_session::state_session_averages;
