//! Flutter-facing bindings for `folio_core`.

pub mod api;
