// self
use crate::obs::{AdminOp, AdminOutcome};

/// Records an admin call outcome via the global metrics recorder (when enabled).
pub fn record_admin_outcome(op: AdminOp, outcome: AdminOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_operator_admin_op_total",
			"op" => op.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (op, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_admin_outcome_noop_without_metrics() {
		record_admin_outcome(AdminOp::Create, AdminOutcome::Failure);
	}
}
