//! Response data structures for the HTTP API.

pub mod users;
