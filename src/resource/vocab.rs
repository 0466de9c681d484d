//! Closed OAuth 2.0 vocabularies accepted by the resource schema.

// self
use crate::_prelude::*;

/// Error returned when a vocabulary string falls outside its closed set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum VocabularyError {
	/// The string does not name any member of the vocabulary.
	#[error("Unknown {kind} value: {value}.")]
	InvalidEnumValue {
		/// Kind of vocabulary (GrantType, ResponseType).
		kind: &'static str,
		/// The offending input string.
		value: String,
	},
}

/// OAuth 2.0 grant types a registered client may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Client Credentials grant for machine-to-machine tokens.
	ClientCredentials,
	/// Authorization Code grant for interactive logins.
	AuthorizationCode,
	/// Implicit grant kept for legacy single-page applications.
	Implicit,
	/// Refresh Token grant for long-lived sessions.
	RefreshToken,
}
impl GrantType {
	/// Every permitted grant type, in schema order.
	pub const ALL: [Self; 4] =
		[Self::ClientCredentials, Self::AuthorizationCode, Self::Implicit, Self::RefreshToken];

	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::ClientCredentials => "client_credentials",
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::Implicit => "implicit",
			GrantType::RefreshToken => "refresh_token",
		}
	}

	/// Checks whether a string names a member of the grant vocabulary.
	pub fn is_valid(value: &str) -> bool {
		Self::ALL.iter().any(|grant| grant.as_str() == value)
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for GrantType {
	type Err = VocabularyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|grant| grant.as_str() == s)
			.ok_or_else(|| VocabularyError::InvalidEnumValue { kind: "GrantType", value: s.into() })
	}
}

/// OAuth 2.0 response types a registered client may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
	/// OpenID Connect ID token response.
	IdToken,
	/// Authorization code response.
	Code,
	/// Access token response (implicit flow).
	Token,
}
impl ResponseType {
	/// Every permitted response type, in schema order.
	pub const ALL: [Self; 3] = [Self::IdToken, Self::Code, Self::Token];

	/// Returns the wire identifier for the response type.
	pub fn as_str(self) -> &'static str {
		match self {
			ResponseType::IdToken => "id_token",
			ResponseType::Code => "code",
			ResponseType::Token => "token",
		}
	}

	/// Checks whether a string names a member of the response vocabulary.
	pub fn is_valid(value: &str) -> bool {
		Self::ALL.iter().any(|response| response.as_str() == value)
	}
}
impl Display for ResponseType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ResponseType {
	type Err = VocabularyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|response| response.as_str() == s).ok_or_else(|| {
			VocabularyError::InvalidEnumValue { kind: "ResponseType", value: s.into() }
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn grant_types_round_trip_their_identifiers() {
		for grant in GrantType::ALL {
			let parsed = grant
				.as_str()
				.parse::<GrantType>()
				.expect("Every emitted identifier should parse back.");

			assert_eq!(parsed, grant);
			assert_eq!(grant.to_string(), grant.as_str());
		}
	}

	#[test]
	fn response_types_round_trip_their_identifiers() {
		for response in ResponseType::ALL {
			let parsed = response
				.as_str()
				.parse::<ResponseType>()
				.expect("Every emitted identifier should parse back.");

			assert_eq!(parsed, response);
		}
	}

	#[test]
	fn unknown_values_are_rejected_with_kind_and_value() {
		let err = "password".parse::<GrantType>().expect_err("Unknown grant must be rejected.");

		assert_eq!(err, VocabularyError::InvalidEnumValue {
			kind: "GrantType",
			value: "password".into()
		});
		assert!(err.to_string().contains("GrantType"));
		assert!(err.to_string().contains("password"));
		assert!("id_token".parse::<GrantType>().is_err());
		assert!("client_credentials".parse::<ResponseType>().is_err());
	}

	#[test]
	fn membership_predicates_agree_with_parsing() {
		for grant in GrantType::ALL {
			assert!(GrantType::is_valid(grant.as_str()));
		}
		for response in ResponseType::ALL {
			assert!(ResponseType::is_valid(response.as_str()));
		}

		assert!(!GrantType::is_valid("password"));
		assert!(!GrantType::is_valid("id_token"));
		assert!(!ResponseType::is_valid("client_credentials"));
		assert!(!ResponseType::is_valid(""));
	}

	#[test]
	fn serde_uses_snake_case_identifiers() {
		let encoded = serde_json::to_string(&GrantType::AuthorizationCode)
			.expect("Grant type should serialize.");

		assert_eq!(encoded, "\"authorization_code\"");

		let decoded: ResponseType =
			serde_json::from_str("\"id_token\"").expect("Response type should deserialize.");

		assert_eq!(decoded, ResponseType::IdToken);
		assert!(serde_json::from_str::<GrantType>("\"password\"").is_err());
	}
}
