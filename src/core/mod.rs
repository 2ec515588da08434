//! Core building blocks: the pure line transforms consumed by the
//! high-level `api` orchestrator.
pub mod transform;
