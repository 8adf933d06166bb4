//! Observability subsystem.
//!
//! All subsystems emit structured `tracing` events: discovery logs probe
//! attempts and exhaustion, queries log provider errors, deployment logs
//! template resolution and submitted contracts.

pub mod logging;
