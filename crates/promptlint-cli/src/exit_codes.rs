//! Unified exit codes for the promptlint CLI.
//! These codes are part of the public contract.

use promptlint_core::{AuditError, AuditErrorKind};

pub const SUCCESS: i32 = 0;
pub const INVALID_ARGS: i32 = 2; // Bad caller input or config error
pub const PROVIDER_ERROR: i32 = 3; // Judge service unreachable/refused
pub const MALFORMED_RESPONSE: i32 = 4; // Judge output failed validation
pub const TIMEOUT: i32 = 5; // Judge round trip exceeded the deadline

pub fn for_error(err: &AuditError) -> i32 {
    match err.kind {
        AuditErrorKind::InvalidRequest => INVALID_ARGS,
        AuditErrorKind::Provider => PROVIDER_ERROR,
        AuditErrorKind::MalformedResponse => MALFORMED_RESPONSE,
        AuditErrorKind::Timeout => TIMEOUT,
    }
}
