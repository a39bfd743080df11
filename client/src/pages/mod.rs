//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its orchestration (submit wiring, context lookups) and
//! delegates control rendering to `components`.

pub mod vehicle_manager;
