//! Static site content served to the host.
//!
//! Hero, about, contact and feed sections carry no core state; they are
//! exposed as plain data so the host renders one source of truth.

pub mod feed;
pub mod profile;
