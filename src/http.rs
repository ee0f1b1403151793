//! HTTP exchange context carried by response models.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// Status and headers of the HTTP exchange that produced a response model.
///
/// Attached once, right after deserialization, and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpContext {
    /// Response status code
    pub status: StatusCode,

    /// Response headers
    pub headers: HeaderMap,
}

impl HttpContext {
    /// Looks up a response header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Response models that record the exchange they came from.
pub trait ApiResponseBody {
    /// Records the exchange that produced this model.
    fn attach_context(&mut self, context: HttpContext);

    /// Status and headers of the exchange, if this model came off the wire.
    fn http_context(&self) -> Option<&HttpContext>;
}
