// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::NaiveDate;

use crate::{AuthenticatedActor, OrganizationRole};

pub fn create_test_direct_recipient() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("dr-123"), OrganizationRole::DirectRecipient)
}

pub fn create_test_subrecipient() -> AuthenticatedActor {
    AuthenticatedActor::new(
        String::from("sr-456"),
        OrganizationRole::SubrecipientContractor,
    )
}

pub fn create_test_joint_office() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("jo-789"), OrganizationRole::JointOffice)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
