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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod caller_role;
mod due_date_alert;
mod error;
mod local_date;
mod reporting_window;

#[cfg(test)]
mod tests;

pub use caller_role::CallerRole;
pub use due_date_alert::{
    DueDateAlert, ScheduledWindow, active_window, compute_due_date_alert, reporting_schedule,
};
pub use error::DomainError;
pub use local_date::{local_date, parse_timezone};
pub use reporting_window::{AlertInterval, ReportingWindow};
