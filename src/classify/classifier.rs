//! Viewer-stage classification.

use thiserror::Error;

use crate::classify::bots::is_bot;
use crate::classify::suffixes::has_static_suffix;
use crate::edge::headers::{HOST, USER_AGENT, X_SHOULD_RENDER, X_TARGET};
use crate::edge::EdgeRequest;
use crate::observability::metrics;

/// The edge platform always supplies these headers; their absence is a
/// caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("viewer request is missing required header '{0}'")]
    MissingHeader(&'static str),
}

/// Absolute URL of the original request.
pub fn target_url(host: &str, uri: &str, querystring: &str) -> String {
    if querystring.is_empty() {
        format!("https://{}{}", host, uri)
    } else {
        format!("https://{}{}?{}", host, uri, querystring)
    }
}

/// Rendering decision for a user agent and URI.
pub fn should_render(user_agent: &str, uri: &str) -> bool {
    is_bot(user_agent) && !has_static_suffix(uri)
}

/// Annotate the request with `x-target` and `x-should-render`.
///
/// Both headers are overwritten, so running this twice yields the same
/// request.
pub fn classify(mut request: EdgeRequest) -> Result<EdgeRequest, ClassifyError> {
    let user_agent = request
        .headers
        .first_value(USER_AGENT)
        .ok_or(ClassifyError::MissingHeader(USER_AGENT))?;
    let host = request
        .headers
        .first_value(HOST)
        .ok_or(ClassifyError::MissingHeader(HOST))?;

    let target = target_url(host, &request.uri, &request.querystring);
    let render = should_render(user_agent, &request.uri);

    tracing::debug!(
        user_agent = %user_agent,
        target = %target,
        should_render = render,
        "Classified viewer request"
    );
    metrics::record_classification(render);

    request.headers.set(X_TARGET, target);
    request
        .headers
        .set(X_SHOULD_RENDER, if render { "true" } else { "false" });

    Ok(request)
}
