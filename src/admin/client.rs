//! HTTP client for the identity provider's client-registration admin API.

// crates.io
use reqwest::{
	RequestBuilder, Response, StatusCode,
	header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, RETRY_AFTER},
};
use serde::de::DeserializeOwned;
use time::format_description::well_known::Rfc2822;
// self
use crate::{
	_prelude::*,
	admin::{AdminCredentials, ClientPayload},
	error::{ConfigError, TransientError, TransportError},
	obs::{self, AdminOp, AdminOutcome, AdminSpan},
};

/// Path segment the provider serves client registrations under.
const CLIENTS_SEGMENT: &str = "clients";

/// Client for the provider's admin API.
///
/// Every call maps upstream statuses onto the crate's error taxonomy: 404s
/// become absence on reads and success on deletes, 409 on creation becomes
/// [`Error::AlreadyRegistered`], 429 and 5xx become retryable
/// [`TransientError`] values carrying any `Retry-After` hint, and the
/// remaining 4xx surface as [`Error::Rejected`].
#[derive(Clone, Debug)]
pub struct AdminClient {
	http: ReqwestClient,
	clients_url: Url,
	credentials: Option<AdminCredentials>,
}
impl AdminClient {
	/// Builds an admin client rooted at the provider's admin URL.
	pub fn new(admin_url: impl AsRef<str>) -> Result<Self> {
		let http = ReqwestClient::builder().build().map_err(ConfigError::from)?;

		Self::with_client(http, admin_url)
	}

	/// Builds an admin client reusing an existing [`ReqwestClient`].
	pub fn with_client(http: ReqwestClient, admin_url: impl AsRef<str>) -> Result<Self> {
		let mut base = Url::parse(admin_url.as_ref())
			.map_err(|source| ConfigError::InvalidAdminUrl { source })?;

		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let clients_url = base
			.join(CLIENTS_SEGMENT)
			.map_err(|source| ConfigError::InvalidAdminUrl { source })?;

		Ok(Self { http, clients_url, credentials: None })
	}

	/// Attaches basic-auth credentials presented on every admin call.
	pub fn with_credentials(mut self, credentials: AdminCredentials) -> Self {
		self.credentials = Some(credentials);

		self
	}

	/// Fetches a registered client, returning `None` when the provider does not know it.
	pub async fn get_client(&self, id: &str) -> Result<Option<ClientPayload>> {
		const OP: AdminOp = AdminOp::Get;

		let span = AdminSpan::new(OP, "get_client");

		obs::record_admin_outcome(OP, AdminOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self
					.authorized(self.http.get(self.client_url(id)))
					.send()
					.await
					.map_err(map_send_error)?;
				let status = response.status();

				if status == StatusCode::NOT_FOUND {
					return Ok(None);
				}
				if !status.is_success() {
					return Err(fail_for_status(response).await);
				}

				parse_json(response).await.map(Some)
			})
			.await;

		record_result(OP, &result);

		result
	}

	/// Lists every client registered with the provider.
	pub async fn list_clients(&self) -> Result<Vec<ClientPayload>> {
		const OP: AdminOp = AdminOp::List;

		let span = AdminSpan::new(OP, "list_clients");

		obs::record_admin_outcome(OP, AdminOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self
					.authorized(self.http.get(self.clients_url.clone()))
					.send()
					.await
					.map_err(map_send_error)?;

				if !response.status().is_success() {
					return Err(fail_for_status(response).await);
				}

				parse_json(response).await
			})
			.await;

		record_result(OP, &result);

		result
	}

	/// Registers a new client and returns the provider's enriched record.
	pub async fn create_client(&self, payload: &ClientPayload) -> Result<ClientPayload> {
		const OP: AdminOp = AdminOp::Create;

		let span = AdminSpan::new(OP, "create_client");

		obs::record_admin_outcome(OP, AdminOutcome::Attempt);

		let result = span
			.instrument(async move {
				let body = encode_payload(payload)?;
				let response = self
					.authorized(self.http.post(self.clients_url.clone()))
					.header(CONTENT_TYPE, "application/json")
					.body(body)
					.send()
					.await
					.map_err(map_send_error)?;
				let status = response.status();

				if status == StatusCode::CONFLICT {
					return Err(Error::AlreadyRegistered);
				}
				if !status.is_success() {
					return Err(fail_for_status(response).await);
				}

				parse_json(response).await
			})
			.await;

		record_result(OP, &result);

		result
	}

	/// Replaces an existing registration identified by the payload's `client_id`.
	pub async fn update_client(&self, payload: &ClientPayload) -> Result<ClientPayload> {
		const OP: AdminOp = AdminOp::Update;

		let span = AdminSpan::new(OP, "update_client");

		obs::record_admin_outcome(OP, AdminOutcome::Attempt);

		let result = span
			.instrument(async move {
				let id = payload.client_id.as_deref().ok_or(ConfigError::MissingClientId)?;
				let body = encode_payload(payload)?;
				let response = self
					.authorized(self.http.put(self.client_url(id)))
					.header(CONTENT_TYPE, "application/json")
					.body(body)
					.send()
					.await
					.map_err(map_send_error)?;

				if !response.status().is_success() {
					return Err(fail_for_status(response).await);
				}

				parse_json(response).await
			})
			.await;

		record_result(OP, &result);

		result
	}

	/// Deregisters a client. Unknown identifiers are treated as already deleted.
	pub async fn delete_client(&self, id: &str) -> Result<()> {
		const OP: AdminOp = AdminOp::Delete;

		let span = AdminSpan::new(OP, "delete_client");

		obs::record_admin_outcome(OP, AdminOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self
					.authorized(self.http.delete(self.client_url(id)))
					.send()
					.await
					.map_err(map_send_error)?;
				let status = response.status();

				if status == StatusCode::NOT_FOUND || status.is_success() {
					return Ok(());
				}

				Err(fail_for_status(response).await)
			})
			.await;

		record_result(OP, &result);

		result
	}

	fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
		match &self.credentials {
			Some(credentials) => request.header(AUTHORIZATION, credentials.authorization()),
			None => request,
		}
	}

	fn client_url(&self, id: &str) -> Url {
		let mut url = self.clients_url.clone();

		// Hierarchical URLs always expose path segments.
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.push(id);
		}

		url
	}
}

fn record_result<T>(op: AdminOp, result: &Result<T>) {
	match result {
		Ok(_) => obs::record_admin_outcome(op, AdminOutcome::Success),
		Err(_) => obs::record_admin_outcome(op, AdminOutcome::Failure),
	}
}

fn encode_payload(payload: &ClientPayload) -> Result<Vec<u8>> {
	serde_json::to_vec(payload).map_err(|source| ConfigError::EncodePayload { source }.into())
}

async fn parse_json<T>(response: Response) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = response.status();
	let bytes = response.bytes().await.map_err(TransportError::from)?;
	let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

	serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
		TransientError::ResponseParse { source, status: Some(status.as_u16()) }.into()
	})
}

async fn fail_for_status(response: Response) -> Error {
	let status = response.status();
	let retry_after = parse_retry_after(response.headers());
	let reason = response.text().await.unwrap_or_default();

	if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
		let message = if reason.is_empty() {
			format!("HTTP {status}")
		} else {
			format!("HTTP {status}: {reason}")
		};

		return TransientError::AdminEndpoint { message, status: Some(status.as_u16()), retry_after }
			.into();
	}

	Error::Rejected { status: status.as_u16(), reason }
}

fn map_send_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}
	if err.is_timeout() {
		return TransientError::AdminEndpoint {
			message: "Request timed out while calling the admin endpoint".into(),
			status: err.status().map(|code| code.as_u16()),
			retry_after: None,
		}
		.into();
	}

	TransportError::from(err).into()
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return i64::try_from(secs).ok().map(Duration::seconds);
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::*;

	#[test]
	fn clients_url_preserves_the_admin_prefix() {
		let bare = AdminClient::new("http://hydra-admin:4445")
			.expect("Bare admin URL should be accepted.");
		let prefixed = AdminClient::new("http://hydra-admin:4445/admin/")
			.expect("Prefixed admin URL should be accepted.");

		assert_eq!(bare.clients_url.as_str(), "http://hydra-admin:4445/clients");
		assert_eq!(prefixed.clients_url.as_str(), "http://hydra-admin:4445/admin/clients");
	}

	#[test]
	fn client_url_escapes_identifiers() {
		let client = AdminClient::new("http://hydra-admin:4445")
			.expect("Admin URL should be accepted.");

		assert_eq!(
			client.client_url("my client").as_str(),
			"http://hydra-admin:4445/clients/my%20client",
		);
	}

	#[test]
	fn invalid_admin_urls_are_rejected() {
		let err = AdminClient::new("hydra-admin:4445:not-a-url ")
			.err()
			.or_else(|| AdminClient::new("mailto:admin").err())
			.expect("Non-hierarchical admin URL must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidAdminUrl { .. })));
	}

	#[tokio::test]
	async fn update_requires_an_assigned_client_id() {
		let client = AdminClient::new("http://hydra-admin:4445")
			.expect("Admin URL should be accepted.");
		let err = client
			.update_client(&client_payload())
			.await
			.expect_err("Updating without a client_id must fail locally.");

		assert!(matches!(err, Error::Config(ConfigError::MissingClientId)));
	}

	#[test]
	fn retry_after_parses_relative_seconds() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, "120".parse().expect("Header value should parse."));

		assert_eq!(parse_retry_after(&headers), Some(Duration::seconds(120)));
	}

	#[test]
	fn retry_after_drops_overflowing_seconds() {
		let mut headers = HeaderMap::new();

		headers.insert(
			RETRY_AFTER,
			u64::MAX.to_string().parse().expect("Header value should parse."),
		);

		assert_eq!(parse_retry_after(&headers), None);
	}

	#[test]
	fn retry_after_ignores_past_dates_and_garbage() {
		let mut headers = HeaderMap::new();

		headers.insert(
			RETRY_AFTER,
			"Wed, 21 Oct 2015 07:28:00 GMT".parse().expect("Header value should parse."),
		);

		assert_eq!(parse_retry_after(&headers), None);

		headers.insert(RETRY_AFTER, "soon".parse().expect("Header value should parse."));

		assert_eq!(parse_retry_after(&headers), None);
	}
}
