// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller roles for due-date reminder text.
//!
//! A caller is either an organization that submits data for review
//! (subrecipients and contractors) or one that reviews and approves it
//! (direct recipients). The role only selects which body text is shown;
//! it never changes whether a reminder is shown.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The perspective from which a due-date reminder is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerRole {
    /// Submits data to a direct recipient for review ahead of the deadline.
    Submitter,
    /// Reviews submissions and is accountable for the statutory deadline.
    Reviewer,
}

impl CallerRole {
    /// Maps the boolean "is this a submitting-org user?" answer onto a role.
    #[must_use]
    pub const fn from_is_submitter(is_submitter: bool) -> Self {
        if is_submitter {
            Self::Submitter
        } else {
            Self::Reviewer
        }
    }

    /// Returns true for the submitting role.
    #[must_use]
    pub const fn is_submitter(self) -> bool {
        matches!(self, Self::Submitter)
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitter => "submitter",
            Self::Reviewer => "reviewer",
        }
    }
}

impl FromStr for CallerRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "submitter" => Ok(Self::Submitter),
            "reviewer" => Ok(Self::Reviewer),
            _ => Err(DomainError::InvalidCallerRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for CallerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
