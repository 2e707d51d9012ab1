// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, OrganizationRole, authenticate_stub, resolve_caller_role};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use handlers::{
    get_due_date_alert, get_reporting_schedule, parse_request_date, parse_request_year,
};
pub use request_response::{
    DueDateAlertRequest, DueDateAlertResponse, ReportingScheduleRequest,
    ReportingScheduleResponse, ScheduledWindowInfo,
};
