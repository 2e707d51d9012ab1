// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers for due-date reminders and reporting schedules.

use chrono::NaiveDate;
use evdc_domain::{
    CallerRole, DomainError, DueDateAlert, ScheduledWindow, active_window, compute_due_date_alert,
    reporting_schedule,
};
use tracing::debug;

use crate::auth::{AuthenticatedActor, resolve_caller_role};
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    DueDateAlertRequest, DueDateAlertResponse, ReportingScheduleRequest,
    ReportingScheduleResponse, ScheduledWindowInfo,
};

/// Years accepted by the schedule endpoint.
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parses a `YYYY-MM-DD` request date into a calendar date.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the string is not a valid date.
pub fn parse_request_date(raw: &str) -> Result<NaiveDate, ApiError> {
    const DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
        time::macros::format_description!("[year]-[month]-[day]");

    let parsed: time::Date = time::Date::parse(raw.trim(), DATE_FORMAT).map_err(|e| {
        translate_domain_error(DomainError::DateParseError {
            date_string: raw.to_string(),
            error: e.to_string(),
        })
    })?;

    // Convert time::Date to chrono::NaiveDate
    NaiveDate::from_ymd_opt(
        parsed.year(),
        u32::from(u8::from(parsed.month())),
        u32::from(parsed.day()),
    )
    .ok_or_else(|| ApiError::Internal {
        message: format!("Date {parsed} cannot be represented"),
    })
}

/// Parses a request year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the string is not an integer year.
pub fn parse_request_year(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse().map_err(|e: std::num::ParseIntError| ApiError::InvalidInput {
        field: String::from("year"),
        message: format!("Invalid year '{raw}': {e}"),
    })
}

/// Computes the due-date reminder for an authenticated actor.
///
/// The evaluation date is `request.date` when supplied, otherwise `today`
/// (the caller's local calendar date).
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the requested date cannot be parsed.
pub fn get_due_date_alert(
    actor: &AuthenticatedActor,
    request: &DueDateAlertRequest,
    today: NaiveDate,
) -> Result<DueDateAlertResponse, ApiError> {
    let evaluated_on: NaiveDate = match &request.date {
        Some(raw) => parse_request_date(raw)?,
        None => today,
    };

    let role: CallerRole = resolve_caller_role(actor);
    let alert: DueDateAlert = compute_due_date_alert(evaluated_on, role);
    let window = active_window(evaluated_on);
    let due_date: Option<String> = window
        .and_then(|w| w.due_date(chrono::Datelike::year(&evaluated_on)))
        .map(|d| d.to_string());

    debug!(
        actor_id = %actor.id,
        organization_role = actor.role.as_str(),
        %role,
        %evaluated_on,
        window = window.map(|w| w.as_str()),
        show_alert = alert.show_alert,
        "Computed due date alert"
    );

    Ok(DueDateAlertResponse {
        show_alert: alert.show_alert,
        heading: alert.heading,
        text: alert.text,
        window,
        due_date,
        role,
        evaluated_on: evaluated_on.to_string(),
    })
}

/// Lists the reporting windows for a year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the year is outside 1-9999.
pub fn get_reporting_schedule(
    request: &ReportingScheduleRequest,
) -> Result<ReportingScheduleResponse, ApiError> {
    if !SUPPORTED_YEARS.contains(&request.year) {
        return Err(translate_domain_error(DomainError::DateOutOfRange {
            year: request.year,
        }));
    }

    let windows: Vec<ScheduledWindowInfo> = reporting_schedule(request.year)
        .iter()
        .map(scheduled_window_to_info)
        .collect();

    debug!(
        year = request.year,
        windows = windows.len(),
        "Listed reporting schedule"
    );

    Ok(ReportingScheduleResponse {
        year: request.year,
        windows,
    })
}

fn scheduled_window_to_info(scheduled: &ScheduledWindow) -> ScheduledWindowInfo {
    ScheduledWindowInfo {
        window: scheduled.window,
        heading: scheduled.window.heading().to_string(),
        modules: scheduled.window.modules().to_vec(),
        due_date: scheduled.due_date.to_string(),
        alert_start: scheduled.alert_interval.start.to_string(),
        alert_end: scheduled.alert_interval.end.to_string(),
    }
}
