//! Data models for the band directory.
//!
//! - `Artist`: one band or solo act, served back to clients as-is
//! - `LocationRecord`, `DateRecord`, `RelationRecord`: per-artist records
//!   joined to `Artist` by `id` at query time
//! - `Concert`: one `(date, location)` row produced by the concert aggregator
//! - `IndexEnvelope`: the `{ "index": [...] }` wrapper used by three upstream endpoints

pub mod artist;
pub mod concert;
pub mod records;

pub use artist::Artist;
pub use concert::Concert;
pub use records::{DateRecord, IndexEnvelope, LocationRecord, RelationRecord};
