//! Emits the OAuth2Client custom resource definition manifest for cluster registration.

// crates.io
use color_eyre::Result;
// self
use oauth2_operator::bootstrap;

fn main() -> Result<()> {
	color_eyre::install()?;

	for definition in bootstrap::custom_resource_definitions() {
		println!("{}", serde_json::to_string_pretty(&definition)?);
	}

	Ok(())
}
