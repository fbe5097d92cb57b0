// Start of file: /src/responder/reply.rs

use serde_json::Value;

/// Optional arguments of a responder operation.
///
/// ```rust,ignore
/// res.ok_with(
///     Reply::new()
///         .status(201)
///         .payload(json!({ "id": id }))
///         .message("user created"),
/// )?
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reply {
    pub(crate) status: Option<u16>,
    pub(crate) payload: Option<Value>,
    pub(crate) message: Option<String>,
    pub(crate) response_code: Option<u32>,
    pub(crate) jsonp: bool,
}

impl Reply {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTTP status; only honored by `ok_with`.
    pub fn status(mut self, http_code: u16) -> Self {
        self.status = Some(http_code);
        self
    }

    pub fn payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Application-level code written to `code` instead of the HTTP status.
    pub fn response_code(mut self, code: u32) -> Self {
        self.response_code = Some(code);
        self
    }

    /// Asks for a JSONP body when the request carried a callback.
    pub fn jsonp(mut self) -> Self {
        self.jsonp = true;
        self
    }
}
