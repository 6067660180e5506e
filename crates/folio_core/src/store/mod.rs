//! Project store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the store contract consumed by the views.
//! - Own the session's authoritative project collection.
//! - Provide the fixed startup seed.
//!
//! # Invariants
//! - Nothing here touches disk; state is lost on restart.

pub mod project_store;
pub mod seed;
