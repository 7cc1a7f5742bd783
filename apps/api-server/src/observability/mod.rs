//! Observability module - tracing observer, request IDs, and alerting.

mod alert;
mod content_log;
mod request_id;

pub use alert::AlertLayer;
pub use content_log::TracingContentObserver;
pub use request_id::RequestIdMiddleware;
