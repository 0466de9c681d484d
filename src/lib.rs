//! Model Kubernetes OAuth2Client resources and project them into identity-provider admin API
//! payloads, with a reqwest-backed client for the registration endpoints.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod admin;
pub mod bootstrap;
pub mod error;
pub mod obs;
pub mod resource;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	#[cfg(feature = "reqwest")] use crate::admin::AdminClient;
	use crate::{
		admin::ClientPayload,
		resource::{GrantType, OAuth2ClientSpec, Scope},
	};

	/// Minimal valid spec fixture shared across tests.
	pub fn client_spec() -> OAuth2ClientSpec {
		OAuth2ClientSpec {
			grant_types: vec![GrantType::ClientCredentials],
			response_types: None,
			scope: test_scope(),
		}
	}

	/// Unassigned payload fixture matching [`client_spec`] for a resource named `my-client`.
	pub fn client_payload() -> ClientPayload {
		ClientPayload {
			client_id: None,
			client_name: "my-client".into(),
			client_secret: None,
			grant_types: vec![GrantType::ClientCredentials],
			response_types: Vec::new(),
			scope: test_scope(),
		}
	}

	/// Scope fixture used by the spec and payload helpers.
	pub fn test_scope() -> Scope {
		Scope::new("read write").expect("Test scope should be valid.")
	}

	/// Builds an [`AdminClient`] pointed at a mock server's base URL.
	#[cfg(feature = "reqwest")]
	pub fn test_admin_client(base_url: impl AsRef<str>) -> AdminClient {
		AdminClient::new(base_url).expect("Test admin client should build successfully.")
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		str::FromStr,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use schemars::JsonSchema;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use kube;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
