//! Closed error taxonomy for the audit path. Both presentation layers
//! pattern-match on [`AuditErrorKind`] instead of re-parsing provider
//! messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditErrorKind {
    /// Network, auth, rate-limit or server failure from the judge service.
    Provider,
    /// The judge returned unparsable or schema-violating output.
    MalformedResponse,
    /// The round trip exceeded the configured deadline.
    Timeout,
    /// Caller input failed basic shape checks, e.g. empty prompt text.
    InvalidRequest,
}

impl AuditErrorKind {
    /// Stable machine-readable tag, used in HTTP error bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditErrorKind::Provider => "provider_error",
            AuditErrorKind::MalformedResponse => "malformed_response",
            AuditErrorKind::Timeout => "timeout",
            AuditErrorKind::InvalidRequest => "invalid_request",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditError {
    pub kind: AuditErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub provider: Option<String>,
}

impl AuditError {
    pub fn new(kind: AuditErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            provider: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn provider_error(detail: impl Into<String>) -> Self {
        Self::new(AuditErrorKind::Provider, detail)
    }

    pub fn malformed_response(detail: impl Into<String>) -> Self {
        Self::new(AuditErrorKind::MalformedResponse, detail)
    }

    pub fn timeout(detail: impl Into<String>) -> Self {
        Self::new(AuditErrorKind::Timeout, detail)
    }

    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::new(AuditErrorKind::InvalidRequest, detail)
    }
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)?;
        if let Some(status) = self.status {
            write!(f, " (status {})", status)?;
        }
        Ok(())
    }
}

impl std::error::Error for AuditError {}
