//! Headless view state machines.
//!
//! # Responsibility
//! - Hold UI state the host renders: editor draft, viewer cursor, grid
//!   routing and window key bindings.
//! - Keep the host a thin renderer with no business rules of its own.
//!
//! # Invariants
//! - All transitions are synchronous and run on the host UI thread.
//! - Window key listeners exist only while their owning view is open.

pub mod form;
pub mod grid;
pub mod keyboard;
pub mod lightbox;
