// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while interpreting domain inputs.
///
/// The due-date calculator itself is total; these errors only arise when
/// raw values (role names, window names, time zones, dates) are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller role is not one of the known roles.
    InvalidCallerRole(String),
    /// Reporting window identifier is not recognized.
    InvalidReportingWindow(String),
    /// Time zone name is not a valid IANA identifier.
    InvalidTimezone(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Due dates cannot be constructed for the requested year.
    DateOutOfRange {
        /// The year that fell outside the supported calendar.
        year: i32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCallerRole(role) => {
                write!(
                    f,
                    "Invalid caller role: '{role}'. Must be 'submitter' or 'reviewer'"
                )
            }
            Self::InvalidReportingWindow(window) => {
                write!(f, "Invalid reporting window: '{window}'")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateOutOfRange { year } => {
                write!(f, "Year {year} is outside the supported calendar range")
            }
        }
    }
}

impl std::error::Error for DomainError {}
