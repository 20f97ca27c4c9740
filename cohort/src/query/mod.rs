//! Record matching rules and aggregation.
//!
//! - [`income`]: parsing of symbol-prefixed currency text
//! - [`predicates`]: text predicates with fixed case and Unicode rules
//! - [`filters`]: the five endpoint transformations over a full record scan

pub mod filters;
pub mod income;
pub mod predicates;
