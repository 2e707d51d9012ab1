// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! Token validation happens upstream of this service. Requests arrive with
//! the resolved account in two headers:
//!
//! - `x-actor-id`: the account identifier
//! - `x-organization-role`: `direct_recipient`, `subrecipient_contractor`
//!   or `joint_office`

use axum::{extract::FromRequestParts, http::request::Parts};
use evdc_api::{ApiError, AuthError, AuthenticatedActor, OrganizationRole, authenticate_stub};
use tracing::{debug, warn};

use crate::{AppState, HttpError};

/// Header carrying the account identifier.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying the account's organization type.
pub const ORGANIZATION_ROLE_HEADER: &str = "x-organization-role";

/// Extractor for the calling portal account.
///
/// # Errors
///
/// Rejects the request with 401 Unauthorized if either header is missing
/// or unreadable, or the actor id is empty, and with 400 Bad Request if the
/// organization role is not recognized. Rejections carry the standard JSON
/// error body.
pub struct SessionActor(pub AuthenticatedActor);

impl FromRequestParts<AppState> for SessionActor {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor_id: &str = header_value(parts, ACTOR_ID_HEADER)?;
        let role_str: &str = header_value(parts, ORGANIZATION_ROLE_HEADER)?;

        let role: OrganizationRole = role_str.parse().map_err(|e: AuthError| {
            warn!(role = %role_str, "Unknown organization role");
            ApiError::from(e)
        })?;

        let actor: AuthenticatedActor =
            authenticate_stub(actor_id.to_string(), role).map_err(|e| {
                warn!(error = %e, "Session validation failed");
                ApiError::from(e)
            })?;

        debug!(
            actor_id = %actor.id,
            role = actor.role.as_str(),
            "Session resolved"
        );

        Ok(Self(actor))
    }
}

fn header_value<'a>(parts: &'a Parts, name: &'static str) -> Result<&'a str, ApiError> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| {
            debug!(header = name, "Missing session header");
            ApiError::AuthenticationFailed {
                reason: format!("Missing {name} header"),
            }
        })?
        .to_str()
        .map_err(|_| {
            warn!(header = name, "Invalid session header encoding");
            ApiError::AuthenticationFailed {
                reason: format!("Invalid {name} header encoding"),
            }
        })
}
