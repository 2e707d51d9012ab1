// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed annual reporting windows and their alert intervals.
//!
//! Five windows recur every calendar year, each with a statutory due date
//! expressed as month/day:
//!
//! | Window          | Due         | Modules |
//! |-----------------|-------------|---------|
//! | Annual/One-Time | March 1     | 5-9     |
//! | Quarter 1       | April 30    | 2-4     |
//! | Quarter 2       | July 31     | 2-4     |
//! | Quarter 3       | October 31  | 2-4     |
//! | Quarter 4       | January 31  | 2-4     |
//!
//! ## Invariants
//!
//! - Due dates are always built in the year being evaluated; Quarter 4 is
//!   never moved into the following year
//! - An alert interval runs from one calendar month before the due date
//!   through the due date, inclusive on both ends
//! - Month subtraction clamps to the last day of the earlier month
//!   (July 31 -> June 30)
//! - Intervals never start before January 1 of the evaluated year, so the
//!   Quarter 4 interval is January 1-31

use crate::caller_role::CallerRole;
use crate::error::DomainError;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const ANNUAL_HEADING: &str = "Annual & One-Time Data due March 1st";
const ANNUAL_REVIEWER_TEXT: &str = "For stations operational in the preceding year, you must submit annual and one-time data (modules 5, 6, 7, 8, 9) by March 1st.";
const ANNUAL_SUBMITTER_TEXT: &str = "For stations operational in the preceding year, submit annual and one-time data (modules 5-9) for review ahead of the deadline. Direct recipients (i.e. state agencies) need time to review/ approve each submission.";

const Q1_HEADING: &str = "Quarter 1 (Jan-Mar) Data due April 30th";
const Q1_REVIEWER_TEXT: &str = "For stations operational in the preceding quarter, you must submit Quarter 1 data (modules 2, 3, 4) by April 30th.";
const Q1_SUBMITTER_TEXT: &str = "For stations operational in the preceding quarter, submit Quarter 1 data (modules 2-4) for review ahead of the deadline. Direct recipients (i.e. state agencies) need time to review/ approve each submission.";

const Q2_HEADING: &str = "Quarter 2 (Apr-Jun) Data due July 31st";
const Q2_REVIEWER_TEXT: &str = "For stations operational in the preceding quarter, you must submit Quarter 2 data (modules 2, 3, 4) by July 31st.";
const Q2_SUBMITTER_TEXT: &str = "For stations operational in the preceding quarter, submit Quarter 2 data (modules 2-4) for review ahead of the deadline. Direct recipients (i.e. state agencies) need time to review/ approve each submission.";

const Q3_HEADING: &str = "Quarter 3 (Jul-Sep) Data due October 31st";
const Q3_REVIEWER_TEXT: &str = "For stations operational in the preceding quarter, you must submit Quarter 3 data (modules 2, 3, 4) by October 31st.";
const Q3_SUBMITTER_TEXT: &str = "For stations operational in the preceding quarter, submit Quarter 3 data (modules 2-4) for review ahead of the deadline. Direct recipients (i.e. state agencies) need time to review/ approve each submission.";

const Q4_HEADING: &str = "Quarter 4 (Oct-Dec) Data due January 31st";
const Q4_REVIEWER_TEXT: &str = "For stations operational in the preceding quarter, you must submit Quarter 4 data (modules 2, 3, 4) by January 31st.";
const Q4_SUBMITTER_TEXT: &str = "For stations operational in the preceding quarter, submit Quarter 4 data (modules 2-4) for review ahead of the deadline. Direct recipients (i.e. state agencies) need time to review/ approve each submission.";

const ANNUAL_MODULES: &[u8] = &[5, 6, 7, 8, 9];
const QUARTERLY_MODULES: &[u8] = &[2, 3, 4];

/// One of the five fixed annual reporting windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingWindow {
    /// Annual and one-time data, due March 1.
    AnnualOneTime,
    /// Quarter 1 (Jan-Mar) data, due April 30.
    #[serde(rename = "quarter_1")]
    Quarter1,
    /// Quarter 2 (Apr-Jun) data, due July 31.
    #[serde(rename = "quarter_2")]
    Quarter2,
    /// Quarter 3 (Jul-Sep) data, due October 31.
    #[serde(rename = "quarter_3")]
    Quarter3,
    /// Quarter 4 (Oct-Dec) data, due January 31.
    #[serde(rename = "quarter_4")]
    Quarter4,
}

impl ReportingWindow {
    /// All windows in evaluation priority order.
    pub const ALL: [Self; 5] = [
        Self::AnnualOneTime,
        Self::Quarter1,
        Self::Quarter2,
        Self::Quarter3,
        Self::Quarter4,
    ];

    /// Returns the string representation of the window.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnnualOneTime => "annual_one_time",
            Self::Quarter1 => "quarter_1",
            Self::Quarter2 => "quarter_2",
            Self::Quarter3 => "quarter_3",
            Self::Quarter4 => "quarter_4",
        }
    }

    /// Returns the statutory due date as `(month, day)`.
    #[must_use]
    pub const fn due_month_day(self) -> (u32, u32) {
        match self {
            Self::AnnualOneTime => (3, 1),
            Self::Quarter1 => (4, 30),
            Self::Quarter2 => (7, 31),
            Self::Quarter3 => (10, 31),
            Self::Quarter4 => (1, 31),
        }
    }

    /// Builds the due date in the given calendar year.
    ///
    /// Returns `None` only if the year is outside chrono's supported range.
    #[must_use]
    pub fn due_date(self, year: i32) -> Option<NaiveDate> {
        let (month, day) = self.due_month_day();
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Builds the alert interval `[due - 1 month, due]` for the given year.
    ///
    /// The start is clamped to January 1 of `year`; only dates in `year`
    /// are ever evaluated against its due dates.
    ///
    /// Returns `None` if either endpoint falls outside the supported
    /// calendar range.
    #[must_use]
    pub fn alert_interval(self, year: i32) -> Option<AlertInterval> {
        let end = self.due_date(year)?;
        let year_start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let start = end.checked_sub_months(Months::new(1))?.max(year_start);
        Some(AlertInterval { start, end })
    }

    /// Returns the fixed heading shown for this window.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::AnnualOneTime => ANNUAL_HEADING,
            Self::Quarter1 => Q1_HEADING,
            Self::Quarter2 => Q2_HEADING,
            Self::Quarter3 => Q3_HEADING,
            Self::Quarter4 => Q4_HEADING,
        }
    }

    /// Returns the body text for this window as read by `role`.
    #[must_use]
    pub const fn body(self, role: CallerRole) -> &'static str {
        match (self, role) {
            (Self::AnnualOneTime, CallerRole::Reviewer) => ANNUAL_REVIEWER_TEXT,
            (Self::AnnualOneTime, CallerRole::Submitter) => ANNUAL_SUBMITTER_TEXT,
            (Self::Quarter1, CallerRole::Reviewer) => Q1_REVIEWER_TEXT,
            (Self::Quarter1, CallerRole::Submitter) => Q1_SUBMITTER_TEXT,
            (Self::Quarter2, CallerRole::Reviewer) => Q2_REVIEWER_TEXT,
            (Self::Quarter2, CallerRole::Submitter) => Q2_SUBMITTER_TEXT,
            (Self::Quarter3, CallerRole::Reviewer) => Q3_REVIEWER_TEXT,
            (Self::Quarter3, CallerRole::Submitter) => Q3_SUBMITTER_TEXT,
            (Self::Quarter4, CallerRole::Reviewer) => Q4_REVIEWER_TEXT,
            (Self::Quarter4, CallerRole::Submitter) => Q4_SUBMITTER_TEXT,
        }
    }

    /// Returns the data modules due in this window.
    #[must_use]
    pub const fn modules(self) -> &'static [u8] {
        match self {
            Self::AnnualOneTime => ANNUAL_MODULES,
            Self::Quarter1 | Self::Quarter2 | Self::Quarter3 | Self::Quarter4 => {
                QUARTERLY_MODULES
            }
        }
    }
}

impl FromStr for ReportingWindow {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|window| window.as_str() == s)
            .ok_or_else(|| DomainError::InvalidReportingWindow(s.to_string()))
    }
}

impl std::fmt::Display for ReportingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive date range during which a reminder is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertInterval {
    /// First day of the interval (inclusive).
    pub start: NaiveDate,
    /// Last day of the interval, the due date itself (inclusive).
    pub end: NaiveDate,
}

impl AlertInterval {
    /// Returns true if `date` falls within the interval, endpoints included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
