use super::status::BookingStatus;
use serde::{Deserialize, Deserializer, Serialize};

/// A reservation record as received from the bookings API or an input file.
///
/// Only `id`, `start_time` and `end_time` matter to the layout; the rest is
/// display payload carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,

    #[serde(alias = "start_time", alias = "start")]
    pub start_time: String,

    #[serde(alias = "end_time", alias = "end")]
    pub end_time: String,

    #[serde(default, alias = "customer_name", alias = "name")]
    pub customer_name: Option<String>,

    #[serde(default, alias = "guest_count", alias = "guests")]
    pub guest_count: Option<u32>,

    #[serde(default)]
    pub status: Option<BookingStatus>,

    #[serde(default, alias = "table_name", alias = "location")]
    pub table: Option<String>,
}

impl Booking {
    pub fn new(id: impl Into<String>, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            customer_name: None,
            guest_count: None,
            status: None,
            table: None,
        }
    }

    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guest_count = Some(guests);
        self
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn status_or_default(&self) -> BookingStatus {
        self.status.unwrap_or_default()
    }

    /// Short human label: customer name if known, id otherwise.
    pub fn label(&self) -> &str {
        self.customer_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

// The API sends numeric ids, hand-written files usually strings.
fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}
