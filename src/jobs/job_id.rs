use serde_derive::{Deserialize, Serialize};
use std::{fmt, ops::Deref};

#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[serde(try_from = "i64")]
pub struct JobId(i64);

impl TryFrom<i64> for JobId {
    type Error = anyhow::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(anyhow::anyhow!("Job ID must be greater than 0."))
        }
    }
}

impl Deref for JobId {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
