//! Appointment status value object.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Lifecycle state of an appointment, stored in the `appointments.status` column.
///
/// The clinic front-end speaks Spanish (`PENDIENTE`, `CONFIRMADA`, `CANCELADA`);
/// the English names are accepted on input as well, in any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum AppointmentStatus {
    #[default]
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "CONFIRMADA")]
    Confirmed,
    #[serde(rename = "CANCELADA")]
    Cancelled,
}

const VARIANTS: &[&str] = &["PENDIENTE", "CONFIRMADA", "CANCELADA"];

/// Input goes through [`AppointmentStatus::parse`], so the wire and the
/// database accept the same spellings.
impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| de::Error::unknown_variant(&raw, VARIANTS))
    }
}

impl AppointmentStatus {
    /// Parse the database / wire representation. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDIENTE" | "PENDING" => Some(Self::Pending),
            "CONFIRMADA" | "CONFIRMED" => Some(Self::Confirmed),
            "CANCELADA" | "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDIENTE",
            Self::Confirmed => "CONFIRMADA",
            Self::Cancelled => "CANCELADA",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
