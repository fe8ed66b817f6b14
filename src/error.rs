use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonoError {
    #[error("environment variable {0} is not set")]
    MissingToken(&'static str),

    #[error("token must not be empty")]
    EmptyToken,

    #[error("invalid datetime {input:?}: expected YYYY-MM-DD HH:MM:SS")]
    InvalidDateTime {
        input: String,
        source: chrono::ParseError,
    },

    #[error("statement range is reversed: from {from} is after to {to}")]
    ReversedRange { from: i64, to: i64 },

    #[error("statement range of {span} seconds exceeds the maximum of 2682000 (31 days + 1 hour)")]
    RangeTooWide { span: i64 },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid or unexpected response format")]
    InvalidResponse,

    #[error("api rejected request: {0}")]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request (400)")]
    InvalidRequest,

    #[error("invalid or missing token (401/403)")]
    Unauthorized,

    #[error("unknown path or account (404)")]
    NotFound,

    #[error("too many requests (429)")]
    RateLimited,

    #[error("unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}
