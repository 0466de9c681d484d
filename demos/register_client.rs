//! Demonstrates projecting an OAuth2Client resource into its admin payload and registering it
//! against a mock identity-provider admin endpoint.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use oauth2_operator::{
	admin::{AdminClient, AdminCredentials},
	resource::{GrantType, OAuth2Client, OAuth2ClientSpec, ResponseType, Scope},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/clients");
			then.status(201).header("content-type", "application/json").body(
				"{\"client_id\":\"demo-id\",\"client_name\":\"demo-client\",\
				\"client_secret\":\"demo-secret\",\"grant_types\":[\"client_credentials\"],\
				\"response_types\":[\"token\"],\"scope\":\"read write\"}",
			);
		})
		.await;
	let resource = OAuth2Client::new("demo-client", OAuth2ClientSpec {
		grant_types: vec![GrantType::ClientCredentials],
		response_types: Some(vec![ResponseType::Token]),
		scope: Scope::new("read write")?,
	});
	let admin = AdminClient::new(server.base_url())?
		.with_credentials(AdminCredentials::new("admin", "hunter2"));
	let created = admin.create_client(&resource.to_payload()).await?;

	println!(
		"Registered {} as {}.",
		created.client_name,
		created.client_id.as_deref().unwrap_or("<unassigned>"),
	);
	// The secret prints redacted; the reconciler would store it in a Kubernetes Secret.
	println!("Returned secret: {:?}.", created.client_secret);

	create_mock.assert_async().await;

	Ok(())
}
