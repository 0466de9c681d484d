//! Admin API surface: wire payloads, credentials, and the HTTP client.

#[cfg(feature = "reqwest")] pub mod client;
pub mod credentials;
pub mod payload;

#[cfg(feature = "reqwest")] pub use client::*;
pub use credentials::*;
pub use payload::*;
