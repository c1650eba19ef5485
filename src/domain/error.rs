//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. Callers that need to distinguish a
//! kind (e.g. a poll timeout) downcast with `Error::downcast_ref`.

use thiserror::Error;

// ── API errors ────────────────────────────────────────────────────────────────

/// Failure reported by the ECS API itself.
#[derive(Debug, Error)]
pub enum EcsError {
    #[error("{code}: {message} (request {request_id})")]
    Api {
        code: String,
        message: String,
        request_id: String,
    },
}

// ── Poll errors ───────────────────────────────────────────────────────────────

/// Failure of a bounded poll-until-ready wait.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("timed out waiting for {what} after {attempts} attempts")]
    Timeout { what: String, attempts: u32 },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors resolving client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("region not configured. Set ALIYUN_REGION or add 'region' to ~/.ecsx/config.yaml.")]
    MissingRegion,

    #[error("credentials not configured. Set ALIYUN_ACCESS_KEY_ID and ALIYUN_ACCESS_KEY_SECRET.")]
    MissingCredentials,
}
