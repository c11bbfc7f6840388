//! User record exchanged with the remote users collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::age::{AgeCalculator, Clock};
use crate::error::DomainResult;

/// User record
///
/// Serialized with camelCase keys to match the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub postal_code: String,
    #[serde(with = "birth_date_serde")]
    pub birth_date: NaiveDate,
}

impl User {
    /// Create a new user record
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            birth_date,
        }
    }

    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age of this user according to the given clock
    pub fn age<C: Clock + Clone>(&self, clock: &C) -> DomainResult<u32> {
        AgeCalculator::new(clock.clone()).age_of(self.birth_date)
    }
}

/// Birth dates go out as `YYYY-MM-DD` and come back in any accepted form.
mod birth_date_serde {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::birth_date::{format_birth_date, parse_birth_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_birth_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_birth_date(&raw).map_err(de::Error::custom)
    }
}
