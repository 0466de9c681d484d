//! Space-delimited scope string validated against the resource schema pattern.

// std
use std::ops::Deref;
// crates.io
use schemars::{
	r#gen::SchemaGenerator,
	schema::{InstanceType, Schema, SchemaObject},
};
// self
use crate::_prelude::*;

/// Schema pattern every scope string must match.
///
/// Tokens are drawn from `[a-zA-Z0-9.*]` and separated by single whitespace
/// characters; one trailing separator is tolerated.
pub const SCOPE_PATTERN: &str = r"([a-zA-Z0-9\.\*]+\s?)+";

/// Errors emitted when validating scope strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeError {
	/// Empty scope strings are not allowed.
	#[error("Scope cannot be empty.")]
	Empty,
	/// Scope contains a character outside the permitted alphabet.
	#[error("Scope contains a forbidden character: {character:?}.")]
	ForbiddenCharacter {
		/// The offending character.
		character: char,
	},
	/// Scope starts with whitespace or separates tokens with more than one.
	#[error("Scope contains misplaced whitespace.")]
	MisplacedWhitespace,
}

/// Validated space-delimited scope string.
///
/// The raw representation is preserved verbatim, including a single trailing
/// separator when present, so round trips through the API server never rewrite
/// what the author submitted.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scope(String);
impl Scope {
	/// Creates a scope after validating it against [`SCOPE_PATTERN`].
	pub fn new(value: impl AsRef<str>) -> Result<Self, ScopeError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Returns the raw scope string exactly as submitted.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Iterator over the individual scope tokens.
	pub fn tokens(&self) -> impl Iterator<Item = &str> {
		self.0.split_ascii_whitespace()
	}
}
impl Deref for Scope {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for Scope {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<Scope> for String {
	fn from(value: Scope) -> Self {
		value.0
	}
}
impl TryFrom<String> for Scope {
	type Error = ScopeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Scope").field(&self.0).finish()
	}
}
impl Display for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for Scope {
	type Err = ScopeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl JsonSchema for Scope {
	fn schema_name() -> String {
		"Scope".into()
	}

	fn json_schema(_: &mut SchemaGenerator) -> Schema {
		let mut schema = SchemaObject {
			instance_type: Some(InstanceType::String.into()),
			..Default::default()
		};

		schema.string().pattern = Some(SCOPE_PATTERN.into());

		schema.into()
	}
}

fn validate_view(view: &str) -> Result<(), ScopeError> {
	if view.is_empty() {
		return Err(ScopeError::Empty);
	}

	// Tokens of [a-zA-Z0-9.*] separated by single whitespace, one trailing separator allowed.
	let mut last_was_separator = true;

	for character in view.chars() {
		if character.is_ascii_whitespace() {
			if last_was_separator {
				return Err(ScopeError::MisplacedWhitespace);
			}

			last_was_separator = true;
		} else if character.is_ascii_alphanumeric() || matches!(character, '.' | '*') {
			last_was_separator = false;
		} else {
			return Err(ScopeError::ForbiddenCharacter { character });
		}
	}

	Ok(())
}
