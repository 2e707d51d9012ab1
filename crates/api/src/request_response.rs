// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use evdc_domain::{CallerRole, ReportingWindow};

/// API request for the due-date reminder banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DueDateAlertRequest {
    /// Optional evaluation date (`YYYY-MM-DD`). Defaults to the local date.
    pub date: Option<String>,
}

/// API response for the due-date reminder banner.
///
/// `showAlert`, `heading` and `text` are the banner contract; the remaining
/// fields describe what the decision was based on.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDateAlertResponse {
    /// Whether a reminder banner should be shown.
    pub show_alert: bool,
    /// Banner heading; empty when no alert is shown.
    pub heading: String,
    /// Banner body; empty when no alert is shown.
    pub text: String,
    /// The matched reporting window, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<ReportingWindow>,
    /// The matched window's due date (`YYYY-MM-DD`), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// The role the text was selected for.
    pub role: CallerRole,
    /// The calendar date the reminder was evaluated on (`YYYY-MM-DD`).
    pub evaluated_on: String,
}

/// API request for a year's reporting schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingScheduleRequest {
    /// The calendar year to list.
    pub year: i32,
}

/// One reporting window in a schedule response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWindowInfo {
    /// The reporting window.
    pub window: ReportingWindow,
    /// The window heading.
    pub heading: String,
    /// Data modules due in this window.
    pub modules: Vec<u8>,
    /// Due date (`YYYY-MM-DD`).
    pub due_date: String,
    /// First day the reminder is shown (`YYYY-MM-DD`).
    pub alert_start: String,
    /// Last day the reminder is shown (`YYYY-MM-DD`).
    pub alert_end: String,
}

/// API response for a year's reporting schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingScheduleResponse {
    /// The listed year.
    pub year: i32,
    /// Windows in evaluation order.
    pub windows: Vec<ScheduledWindowInfo>,
}
