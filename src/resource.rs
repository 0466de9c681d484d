//! OAuth2Client resource schema: vocabularies, scope validation, and projection.

pub mod client;
pub mod scope;
pub mod vocab;

pub use client::*;
pub use scope::*;
pub use vocab::*;
