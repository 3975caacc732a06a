// crates/stix-forge-core/src/core/timestamp.rs
// ============================================================================
// Module: STIX Forge Timestamps
// Description: Canonical UTC timestamps with millisecond precision.
// Purpose: Provide the single time representation used by properties and rules.
// Dependencies: thiserror, time
// ============================================================================

//! ## Overview
//! Exchange timestamps are always UTC and always truncated to millisecond
//! precision, so the canonical rendering `YYYY-MM-DDTHH:MM:SS.mmmZ` and the
//! RFC 3339 parser compose into an exact round trip. Truncation happens at
//! every construction site rather than at comparison time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;
use time::Duration;
use time::OffsetDateTime;
use time::UtcOffset;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when decoding timestamp text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The input was not a parseable RFC 3339 timestamp.
    #[error("invalid rfc3339 timestamp: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Canonical Timestamp
// ============================================================================

/// Canonical timestamp value carried by timestamp properties.
///
/// # Invariants
/// - The inner instant is always expressed in UTC.
/// - Sub-millisecond precision is always truncated away, so two values that
///   render identically compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StixTimestamp(OffsetDateTime);

impl StixTimestamp {
    /// The Unix epoch, `1970-01-01T00:00:00.000Z`.
    pub const EPOCH: Self = Self(OffsetDateTime::UNIX_EPOCH);

    /// Captures the current instant, truncated to millisecond precision.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(OffsetDateTime::now_utc())
    }

    /// Converts an arbitrary datetime into canonical form.
    #[must_use]
    pub fn from_datetime(value: OffsetDateTime) -> Self {
        Self(truncate_to_millis(value.to_offset(UtcOffset::UTC)))
    }

    /// Parses an RFC 3339 timestamp, with or without fractional seconds,
    /// normalizing any offset to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::Parse`] when the text is not valid RFC 3339.
    pub fn parse(text: &str) -> Result<Self, TimestampError> {
        let parsed = OffsetDateTime::parse(text, &Rfc3339)
            .map_err(|_| TimestampError::Parse(text.to_string()))?;
        Ok(Self::from_datetime(parsed))
    }

    /// Returns the underlying UTC datetime.
    #[must_use]
    pub const fn as_datetime(&self) -> OffsetDateTime {
        self.0
    }

    /// Returns a copy shifted forward by the given number of milliseconds,
    /// saturating at the representable range.
    #[must_use]
    pub fn plus_millis(self, millis: i64) -> Self {
        self.0
            .checked_add(Duration::milliseconds(millis))
            .map_or(self, Self::from_datetime)
    }
}

impl fmt::Display for StixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        );
        let text = self.0.format(format).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Drops sub-millisecond precision from a datetime.
fn truncate_to_millis(value: OffsetDateTime) -> OffsetDateTime {
    let floored = (value.nanosecond() / 1_000_000) * 1_000_000;
    value.replace_nanosecond(floored).unwrap_or(value)
}
