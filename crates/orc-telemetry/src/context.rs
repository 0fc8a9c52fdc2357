//! Per-request correlation context.
//!
//! Every inbound call (`get_config`, `register`) runs inside a span carrying
//! a fresh request ID so its log lines can be grouped.

use uuid::Uuid;

/// Correlation data for one inbound request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: Uuid,
    /// Subsystem tag handling the request.
    pub subsystem: &'static str,
    /// Operation name.
    pub operation: &'static str,
}

impl RequestContext {
    /// New context with a random request ID.
    pub fn new(subsystem: &'static str, operation: &'static str) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            subsystem,
            operation,
        }
    }

    /// Build the tracing span for this request.
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "request",
            subsystem = self.subsystem,
            operation = self.operation,
            request_id = %self.request_id,
        )
    }
}

/// Shorthand for `RequestContext::new(..).span()`.
pub fn request_span(subsystem: &'static str, operation: &'static str) -> tracing::Span {
    RequestContext::new(subsystem, operation).span()
}
