// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use evdc_domain::DomainError;

use crate::{ApiError, AuthError, parse_request_date, translate_domain_error};

#[test]
fn test_translate_domain_error_fields() {
    let cases = [
        (DomainError::InvalidCallerRole(String::from("x")), "role"),
        (DomainError::InvalidReportingWindow(String::from("x")), "window"),
        (DomainError::InvalidTimezone(String::from("x")), "timezone"),
        (
            DomainError::DateParseError {
                date_string: String::from("x"),
                error: String::from("bad"),
            },
            "date",
        ),
        (DomainError::DateOutOfRange { year: 0 }, "year"),
    ];

    for (err, expected_field) in cases {
        let message: String = err.to_string();
        assert_eq!(
            translate_domain_error(err),
            ApiError::InvalidInput {
                field: String::from(expected_field),
                message,
            }
        );
    }
}

#[test]
fn test_auth_error_conversion() {
    let err: ApiError = AuthError::AuthenticationFailed {
        reason: String::from("Actor ID cannot be empty"),
    }
    .into();
    assert_eq!(
        err.to_string(),
        "Authentication failed: Actor ID cannot be empty"
    );

    let err: ApiError = AuthError::UnknownOrganizationRole {
        role: String::from("vendor"),
    }
    .into();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "organization_role"));
}

#[test]
fn test_parse_request_date() {
    assert_eq!(
        parse_request_date(" 2024-02-29 ").unwrap(),
        chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert!(parse_request_date("2025-2-1").is_err());
    assert!(parse_request_date("not a date").is_err());
}
