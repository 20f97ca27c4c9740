//! Record store implementations.
//!
//! - [`store`]: the [`RecordStore`] trait handlers depend on
//! - [`users`]: PostgreSQL implementation over the `users` table
//! - [`fixture`]: in-memory implementation loaded from a JSON file

pub mod fixture;
pub mod store;
pub mod users;

pub use fixture::FixtureStore;
pub use store::RecordStore;
pub use users::Users;
