use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    #[default]
    #[serde(alias = "PENDING", alias = "Pending")]
    Pending,
    #[serde(alias = "CONFIRMED", alias = "Confirmed")]
    Confirmed,
    #[serde(alias = "SEATED", alias = "Seated")]
    Seated,
    #[serde(alias = "COMPLETED", alias = "Completed")]
    Completed,
    #[serde(alias = "CANCELLED", alias = "Cancelled", alias = "canceled")]
    Cancelled,
    #[serde(alias = "NO_SHOW", alias = "no_show", alias = "noshow")]
    NoShow,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Seated => "seated",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no-show",
        }
    }
}
