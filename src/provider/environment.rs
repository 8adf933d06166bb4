//! Host execution environment.

use crate::provider::capability::WalletCapability;

/// The execution context the bridge runs inside.
///
/// The wallet provider is injected by a browser extension and only exists
/// in an interactive page context. Modelling the host as a trait keeps the
/// ambient global out of the components and lets tests script both the
/// context kind and the moment the provider appears.
pub trait HostEnvironment: Send + Sync {
    /// Whether this context can ever carry an injected provider.
    fn is_interactive(&self) -> bool;

    /// Probe the host for the injected capability. Called once per poll
    /// tick; returns the capability as soon as the extension has injected it.
    fn probe(&self) -> Option<WalletCapability>;
}
