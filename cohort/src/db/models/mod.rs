//! Database record structures.

pub mod users;
