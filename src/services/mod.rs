//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules so route handlers can stay focused on
//! request parsing and status mapping. Storage sits behind `AnimalStore`.

pub mod zoo;
