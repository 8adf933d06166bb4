//! State query subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → service.rs (discover provider, issue one chain query)
//!     → normalize.rs (arity-keyed result shaping)
//!     → Option<Value> back to the caller (absence is not an error)
//! ```

pub mod normalize;
pub mod service;

pub use normalize::LookupArity;
pub use service::StateQueryService;
