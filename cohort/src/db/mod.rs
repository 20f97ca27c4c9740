//! Data access for user records.
//!
//! The HTTP handlers only see the [`handlers::RecordStore`] trait. Two implementations exist:
//!
//! ```text
//! ┌──────────────┐
//! │   Handlers   │  (api::handlers)
//! └──────┬───────┘
//!        │ Arc<dyn RecordStore>
//!        ↓
//! ┌──────────────┐      ┌──────────────┐
//! │    Users     │      │ FixtureStore │
//! │ (PostgreSQL) │      │ (JSON file)  │
//! └──────────────┘      └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: store trait and implementations
//! - [`models`]: record structures matching the table schema
//! - [`errors`]: the store failure type

pub mod errors;
pub mod handlers;
pub mod models;
