//! Recurring-event normalization.
//!
//! The scheduling collaborator owns occurrence expansion; this module only
//! turns raw request fields into a well-formed [`RecurrenceSpec`] to forward.

use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use campus_core::{DomainError, DomainResult};

/// Recurrence frequency recognized by the scheduling service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::None => "NONE",
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Frequency::None),
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            "YEARLY" => Ok(Frequency::Yearly),
            other => Err(DomainError::validation(format!(
                "frequency must be one of NONE, DAILY, WEEKLY, MONTHLY, YEARLY (got '{other}')"
            ))),
        }
    }
}

impl core::fmt::Display for Frequency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized recurrence, ready to hand to the scheduling service.
///
/// Invariants: `start < end`; `repeat_until` is only carried when the spec
/// actually recurs. An absent `repeat_until` means open-ended, interpreted by
/// the receiving service (no local expansion).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceSpec {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub frequency: Frequency,
    pub repeat_until: Option<DateTime<Utc>>,
}

impl RecurrenceSpec {
    /// Build a spec from raw request fields.
    ///
    /// `start`, `end` and `frequency` are hard-validated. `repeat_until` is
    /// parsed tolerantly: a value that does not read as a timestamp degrades
    /// to "no end date" instead of failing the request.
    pub fn build(
        start: &str,
        end: &str,
        frequency: &str,
        repeat_until: Option<&str>,
    ) -> DomainResult<Self> {
        let start = parse_timestamp(start, "start")?;
        let end = parse_timestamp(end, "end")?;
        if start >= end {
            return Err(DomainError::validation("start must be before end"));
        }

        let frequency: Frequency = frequency.parse()?;

        // Explicit tolerant branch: unparseable input means open-ended.
        let repeat_until = match frequency {
            Frequency::None => None,
            _ => repeat_until.and_then(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|d| d.with_timezone(&Utc))
            }),
        };

        Ok(Self {
            start,
            end,
            frequency,
            repeat_until,
        })
    }
}

fn parse_timestamp(raw: &str, field: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| DomainError::validation(format!("{field} is not a valid timestamp: {e}")))
}
