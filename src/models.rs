use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PROFILE_SAVED_MESSAGE: &str = "Profile saved!";

/// A profile as submitted by the builder UI. Elements are kept as raw JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub fields: Vec<Value>,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        write!(f, "fields={fields}")
    }
}

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub message: &'static str,
    pub data: Profile,
}

impl SaveProfileResponse {
    pub fn saved(profile: Profile) -> Self {
        Self {
            message: PROFILE_SAVED_MESSAGE,
            data: profile,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
