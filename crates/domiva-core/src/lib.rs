//! domiva-core
//!
//! Pure domain types and errors. No I/O, no persistence dependency —
//! this is the shared vocabulary of the Domiva home-care platform,
//! consumed by the classification, bundling, and scheduling crates and
//! exported to the TypeScript frontend via ts-rs.

pub mod error;
pub mod models;
