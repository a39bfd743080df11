//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the same-origin REST calls; request/response interpretation
//! lives in the shared `vehicles` crate.

pub mod api;
