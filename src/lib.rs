//! Rust client for the Monobank personal REST API.
//! Resolves human-friendly date ranges into the timestamp windows the API
//! requires, fetches client info and statements over authenticated GET, and
//! renders the results as plain text.

pub mod client;
pub mod display;
pub mod error;
pub mod models;
pub mod range;

pub use client::{Client, DEFAULT_ACCOUNT};
pub use display::{format_minor_units, render_client_info, render_transactions};
pub use error::{ApiError, MonoError};
pub use models::{Account, ClientInfo, Jar, Transaction};
pub use range::{MAX_RANGE_SECS, StatementRange};
