//! Optional observability helpers for admin API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_operator.admin_op` with the `op`
//!   (operation) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `oauth2_operator_admin_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Admin API operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminOp {
	/// Fetch of a single registered client.
	Get,
	/// Listing of every registered client.
	List,
	/// Registration of a new client.
	Create,
	/// Update of an existing registration.
	Update,
	/// Deregistration of a client.
	Delete,
}
impl AdminOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AdminOp::Get => "get",
			AdminOp::List => "list",
			AdminOp::Create => "create",
			AdminOp::Update => "update",
			AdminOp::Delete => "delete",
		}
	}
}
impl Display for AdminOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminOutcome {
	/// Entry to an admin call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl AdminOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AdminOutcome::Attempt => "attempt",
			AdminOutcome::Success => "success",
			AdminOutcome::Failure => "failure",
		}
	}
}
impl Display for AdminOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
