// ABOUTME: Dispatch of HTTP control requests to fleet workers.
// ABOUTME: Request/outcome types, the transport seam, observability sinks and the concurrent executor.

mod error;
mod executor;
mod outcome;
mod request;
mod sink;
mod transport;

pub use error::{TransportError, UnsupportedMethod};
pub use executor::{BatchResult, Executor};
pub use outcome::{DispatchOutcome, RecordedOutcome, Response};
pub use request::{DispatchRequest, Endpoint, FORM_CONTENT_TYPE, Method, RequestId, RequestRef};
pub use sink::{MemorySink, OutcomeSink, TracingSink};
pub use transport::{HttpTransport, Transport};
