// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of "today" in a declared time zone.
//!
//! Reminders are evaluated on local calendar dates. A UTC instant near
//! midnight can fall on different dates depending on the zone, so the zone
//! is always explicit.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Parses an IANA time zone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is not recognized.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Returns the calendar date of `now` as observed in `tz`.
#[must_use]
pub fn local_date(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}
