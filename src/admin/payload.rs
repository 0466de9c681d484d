//! Wire representation of an OAuth2 client digestible by the admin API.

// self
use crate::{
	_prelude::*,
	admin::ClientSecret,
	resource::{GrantType, ResponseType, Scope},
};

/// OAuth2 client record exchanged with the admin API.
///
/// `response_types` is always serialized, even when empty, while `client_id`
/// and `client_secret` stay absent until the provider assigns them. Field
/// declaration order matches the provider's own JSON layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPayload {
	/// Identifier the provider assigned to the client.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_id: Option<String>,
	/// Human-readable display name, copied from the resource's metadata name.
	#[serde(default)]
	pub client_name: String,
	/// Credential material, only ever populated from provider responses.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_secret: Option<ClientSecret>,
	/// Grant types the client may use, in submitted order.
	#[serde(default)]
	pub grant_types: Vec<GrantType>,
	/// Response types the client may request, in submitted order.
	#[serde(default)]
	pub response_types: Vec<ResponseType>,
	/// Space-delimited scope string, carried verbatim.
	pub scope: Scope,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::*;

	#[test]
	fn unassigned_payload_omits_provider_fields() {
		let encoded = serde_json::to_value(client_payload())
			.expect("Payload should serialize successfully.");

		assert_eq!(encoded.get("client_id"), None);
		assert_eq!(encoded.get("client_secret"), None);
		assert_eq!(
			encoded.pointer("/client_name").and_then(serde_json::Value::as_str),
			Some("my-client"),
		);
		assert_eq!(
			encoded.pointer("/scope").and_then(serde_json::Value::as_str),
			Some("read write"),
		);
	}

	#[test]
	fn empty_response_types_stay_on_the_wire() {
		let encoded = serde_json::to_value(client_payload())
			.expect("Payload should serialize successfully.");
		let response_types = encoded
			.get("response_types")
			.and_then(serde_json::Value::as_array)
			.expect("Empty response types must still be present.");

		assert!(response_types.is_empty());
	}

	#[test]
	fn provider_response_round_trips() {
		let decoded: ClientPayload = serde_json::from_value(serde_json::json!({
			"client_id": "generated-id",
			"client_name": "my-client",
			"client_secret": "generated-secret",
			"grant_types": ["client_credentials"],
			"response_types": ["token"],
			"scope": "read write"
		}))
		.expect("Provider response should deserialize.");

		assert_eq!(decoded.client_id.as_deref(), Some("generated-id"));
		assert_eq!(
			decoded.client_secret.as_ref().map(ClientSecret::expose),
			Some("generated-secret"),
		);
		assert_eq!(decoded.grant_types, vec![GrantType::ClientCredentials]);
		assert_eq!(decoded.response_types, vec![ResponseType::Token]);
	}

	#[test]
	fn missing_arrays_default_to_empty() {
		let decoded: ClientPayload = serde_json::from_value(serde_json::json!({
			"client_name": "sparse",
			"scope": "read"
		}))
		.expect("Sparse response should deserialize.");

		assert!(decoded.grant_types.is_empty());
		assert!(decoded.response_types.is_empty());
		assert_eq!(decoded.client_id, None);
	}
}
