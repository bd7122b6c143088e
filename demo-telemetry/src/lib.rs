//! # Demo Telemetry
//!
//! Logging and tracing shared by both services:
//!
//! - `init` - subscriber setup with an optional OTLP span exporter
//! - `propagation` - W3C trace-context injection/extraction over HTTP headers
//!
//! The TraceContext propagator is always installed, so an account request and
//! the payment call it makes share one trace whenever spans are exported.

mod init;
pub mod propagation;

pub use init::{OTLP_ENDPOINT_ENV, Telemetry, init};
pub use propagation::{HeaderExtractor, HeaderInjector, inject_current_context, make_request_span};
