//! Explicit definition registration for the resource kinds this crate ships.
//!
//! Nothing here runs as an import side effect. Installers call
//! [`custom_resource_definitions`] during application bootstrap and apply the
//! returned manifests themselves.

// crates.io
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;
// self
use crate::resource::OAuth2Client;

/// Returns the OAuth2Client custom resource definition.
pub fn oauth2_client_definition() -> CustomResourceDefinition {
	OAuth2Client::crd()
}

/// Returns every custom resource definition this crate registers.
pub fn custom_resource_definitions() -> Vec<CustomResourceDefinition> {
	vec![oauth2_client_definition()]
}
