// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission due-date reminder calculation.
//!
//! Given a calendar date and the caller's role, this module decides which
//! reporting window (if any) is currently open for alerting and selects
//! the heading and body text to display.
//!
//! ## Invariants
//!
//! - Windows are checked in the fixed order Annual/One-Time, Q1, Q2, Q3, Q4
//!   and the first match wins
//! - All due dates are built in the evaluation date's own year
//! - When no window matches, heading and text are empty strings
//! - The role changes only the body text, never whether an alert is shown

use crate::caller_role::CallerRole;
use crate::reporting_window::{AlertInterval, ReportingWindow};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The reminder banner state for a given date and role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDateAlert {
    /// Whether a reminder banner should be shown.
    pub show_alert: bool,
    /// Banner heading; empty when `show_alert` is false.
    pub heading: String,
    /// Banner body; empty when `show_alert` is false.
    pub text: String,
}

impl DueDateAlert {
    /// The result when no reporting window is open.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds the alert for a matched window.
    #[must_use]
    pub fn for_window(window: ReportingWindow, role: CallerRole) -> Self {
        Self {
            show_alert: true,
            heading: window.heading().to_string(),
            text: window.body(role).to_string(),
        }
    }
}

/// Returns the first reporting window whose alert interval contains `today`.
///
/// Intervals are evaluated against due dates in `today`'s calendar year.
#[must_use]
pub fn active_window(today: NaiveDate) -> Option<ReportingWindow> {
    let year: i32 = today.year();

    ReportingWindow::ALL.into_iter().find(|window| {
        window
            .alert_interval(year)
            .is_some_and(|interval| interval.contains(today))
    })
}

/// Computes the due-date reminder for `today` as read by `role`.
///
/// Time of day plays no part; only the calendar date is considered.
///
/// # Example
///
/// ```text
/// 2025-02-01, Reviewer  -> Annual & One-Time heading, reviewer text
/// 2025-03-02, any role  -> no alert
/// 2025-03-31, Submitter -> Quarter 1 heading, submitter text
/// 2025-01-31, Submitter -> Quarter 4 heading, submitter text
/// ```
#[must_use]
pub fn compute_due_date_alert(today: NaiveDate, role: CallerRole) -> DueDateAlert {
    active_window(today).map_or_else(DueDateAlert::none, |window| {
        DueDateAlert::for_window(window, role)
    })
}

/// A reporting window with its concrete dates for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledWindow {
    /// The reporting window.
    pub window: ReportingWindow,
    /// The due date in the scheduled year.
    pub due_date: NaiveDate,
    /// The interval during which the reminder is shown.
    pub alert_interval: AlertInterval,
}

/// Lists every reporting window with its due date and alert interval.
///
/// Windows whose dates cannot be represented in `year` are omitted.
#[must_use]
pub fn reporting_schedule(year: i32) -> Vec<ScheduledWindow> {
    ReportingWindow::ALL
        .into_iter()
        .filter_map(|window| {
            window.alert_interval(year).map(|alert_interval| ScheduledWindow {
                window,
                due_date: alert_interval.end,
                alert_interval,
            })
        })
        .collect()
}
