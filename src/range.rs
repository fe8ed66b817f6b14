use crate::error::MonoError;
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use log::debug;

/// Maximum statement span the API accepts: 31 days plus one hour.
pub const MAX_RANGE_SECS: i64 = 2_682_000;

const DEFAULT_WINDOW_DAYS: i64 = 31;
const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A validated statement window as Unix-second bounds, both UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementRange {
    pub from: i64,
    pub to: i64,
}

impl StatementRange {
    /// Resolve optional human-readable bounds into a validated window.
    ///
    /// Inputs use the format `YYYY-MM-DD HH:MM:SS` and are interpreted as
    /// UTC; no timezone offsets are accepted. Defaulting rules:
    ///
    /// - neither given: the 31 days up to now,
    /// - only `from` given: from there up to now,
    /// - only `to` given: the 31 days up to it.
    ///
    /// The width check runs after defaulting, so default windows (exactly
    /// 31 days) always pass; only explicit bounds can exceed the limit.
    pub fn resolve(from: Option<&str>, to: Option<&str>) -> Result<Self, MonoError> {
        let (from_dt, to_dt) = match (from, to) {
            (None, None) => {
                let to_dt = Utc::now();
                (to_dt - TimeDelta::days(DEFAULT_WINDOW_DAYS), to_dt)
            }
            (Some(f), to) => {
                let from_dt = parse_utc(f)?;
                let to_dt = match to {
                    Some(t) => parse_utc(t)?,
                    None => Utc::now(),
                };
                (from_dt, to_dt)
            }
            (None, Some(t)) => {
                let to_dt = parse_utc(t)?;
                (to_dt - TimeDelta::days(DEFAULT_WINDOW_DAYS), to_dt)
            }
        };

        let range = StatementRange {
            from: from_dt.timestamp(),
            to: to_dt.timestamp(),
        };
        range.validate()?;
        debug!("Resolved statement range {} to {}", range.from, range.to);
        Ok(range)
    }

    fn validate(&self) -> Result<(), MonoError> {
        if self.to < self.from {
            return Err(MonoError::ReversedRange {
                from: self.from,
                to: self.to,
            });
        }
        let span = self.to - self.from;
        if span > MAX_RANGE_SECS {
            return Err(MonoError::RangeTooWide { span });
        }
        Ok(())
    }
}

fn parse_utc(raw: &str) -> Result<DateTime<Utc>, MonoError> {
    NaiveDateTime::parse_from_str(raw, INPUT_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|source| MonoError::InvalidDateTime {
            input: raw.to_string(),
            source,
        })
}
