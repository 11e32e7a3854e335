//! Retry policy for the render call.
//!
//! # Design Decisions
//! - Transport failures, 429 and 5xx are worth another attempt
//! - Other statuses are final; the router fails open on them at once
//! - Malformed success bodies are never retried (integration bug)

use crate::render::RenderOutcome;

/// Returns true if another attempt may produce a different outcome.
pub fn is_retryable(outcome: &RenderOutcome) -> bool {
    match outcome {
        RenderOutcome::Rendered(_) => false,
        RenderOutcome::Unreachable(_) => true,
        RenderOutcome::Rejected { status, .. } => *status == 429 || (500..600).contains(status),
    }
}
