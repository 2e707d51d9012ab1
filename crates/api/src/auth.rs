// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Portal actors and role resolution.
//!
//! Session handling lives outside this crate. What arrives here is an
//! actor id and the organization type of the account, which is enough to
//! decide how due-date reminders should be worded.

use crate::error::AuthError;
use evdc_domain::CallerRole;
use std::str::FromStr;

/// Organization types that hold portal accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationRole {
    /// Receives federal funds directly and approves or rejects submissions.
    DirectRecipient,
    /// Submits data on behalf of, or under authorization from, a direct
    /// recipient.
    SubrecipientContractor,
    /// Joint-office oversight; reads and analyzes submitted data.
    JointOffice,
}

impl OrganizationRole {
    /// Returns the string representation of the organization role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectRecipient => "direct_recipient",
            Self::SubrecipientContractor => "subrecipient_contractor",
            Self::JointOffice => "joint_office",
        }
    }
}

impl FromStr for OrganizationRole {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct_recipient" | "dr" => Ok(Self::DirectRecipient),
            "subrecipient_contractor" | "subrecipient" | "contractor" | "sr" => {
                Ok(Self::SubrecipientContractor)
            }
            "joint_office" | "jo" => Ok(Self::JointOffice),
            _ => Err(AuthError::UnknownOrganizationRole {
                role: s.to_string(),
            }),
        }
    }
}

/// An authenticated portal account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The organization type of the account.
    pub role: OrganizationRole,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(id: String, role: OrganizationRole) -> Self {
        Self { id, role }
    }

    /// Returns true if this actor belongs to a submitting organization.
    #[must_use]
    pub const fn is_submitter(&self) -> bool {
        matches!(self.role, OrganizationRole::SubrecipientContractor)
    }
}

/// Stub authentication: accepts any non-empty actor id.
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if the actor id is empty.
pub fn authenticate_stub(
    actor_id: String,
    role: OrganizationRole,
) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Classifies an actor for reminder wording.
///
/// Subrecipients and contractors submit; everyone else reviews.
#[must_use]
pub const fn resolve_caller_role(actor: &AuthenticatedActor) -> CallerRole {
    CallerRole::from_is_submitter(actor.is_submitter())
}
