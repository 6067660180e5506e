//! Portfolio domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and the views.
//! - Keep one project shape for grid tiles, lightbox and editor drafts.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Deletion is a hard removal; nothing outlives the process.

pub mod project;
