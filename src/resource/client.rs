//! OAuth2Client custom resource schema and its admin payload projection.

// crates.io
use kube::CustomResource;
// self
use crate::{
	_prelude::*,
	admin::ClientPayload,
	resource::{GrantType, ResponseType, Scope},
};

/// Bulk enumeration form of [`OAuth2Client`], as returned by list calls.
pub type OAuth2ClientList = kube::core::ObjectList<OAuth2Client>;

/// Desired state of an OAuth2 client registration.
#[derive(CustomResource, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[kube(
	group = "hydra.ory.sh",
	version = "v1alpha1",
	kind = "OAuth2Client",
	namespaced,
	status = "OAuth2ClientStatus",
	doc = "OAuth2Client is the schema for the OAuth2 client registrations API."
)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2ClientSpec {
	/// Grant types the client is allowed to use.
	#[schemars(length(min = 1, max = 4))]
	pub grant_types: Vec<GrantType>,
	/// Response type strings the client can use at the authorization endpoint.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	#[schemars(length(min = 1, max = 3))]
	pub response_types: Option<Vec<ResponseType>>,
	/// Space-separated scope values the client can request access tokens for.
	pub scope: Scope,
}

/// Most recently observed state of an OAuth2 client registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2ClientStatus {
	/// Kubernetes secret holding this client's id and password.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub secret: Option<String>,
	/// Identifier the provider assigned to this client.
	#[serde(default, rename = "clientID", skip_serializing_if = "Option::is_none")]
	pub client_id: Option<String>,
	/// Resource generation most recently acted upon.
	#[serde(default, skip_serializing_if = "generation_is_unset")]
	pub observed_generation: i64,
}

impl OAuth2Client {
	/// Projects the resource into the payload the admin API digests.
	///
	/// Projection is total and order-preserving: grant types keep their
	/// submitted order, absent response types collapse to an empty sequence,
	/// and the credentials secret never leaves the cluster.
	pub fn to_payload(&self) -> ClientPayload {
		ClientPayload {
			client_name: self.metadata.name.clone().unwrap_or_default(),
			client_id: self.status.as_ref().and_then(|status| status.client_id.clone()),
			client_secret: None,
			grant_types: self.spec.grant_types.clone(),
			response_types: self.spec.response_types.clone().unwrap_or_default(),
			scope: self.spec.scope.clone(),
		}
	}
}

fn generation_is_unset(generation: &i64) -> bool {
	*generation == 0
}
