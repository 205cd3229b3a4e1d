use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CheckError, DateRangeError};
use crate::utils::date::{format_form_date, parse_form_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Both dates must be on or after `today`, and `start <= end`.
    pub fn new(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<Self, DateRangeError> {
        if start < today {
            return Err(DateRangeError::InPast(start));
        }
        if end < start {
            return Err(DateRangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn from_form(start: &str, end: &str, today: NaiveDate) -> Result<Self, DateRangeError> {
        Self::new(parse_form_date(start)?, parse_form_date(end)?, today)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Identifier of a room. The server may echo it as a JSON string or number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(value: &str) -> Self {
        RoomId(value.to_string())
    }
}

impl From<String> for RoomId {
    fn from(value: String) -> Self {
        RoomId(value)
    }
}

impl From<u32> for RoomId {
    fn from(value: u32) -> Self {
        RoomId(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => RoomId(s),
            Raw::Number(n) => RoomId(n.to_string()),
        })
    }
}

/// Form posted to the availability endpoint. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub start: String,
    pub end: String,
    pub csrf_token: String,
    pub room_id: RoomId,
}

impl AvailabilityRequest {
    pub fn new(range: &DateRange, csrf_token: &str, room_id: &RoomId) -> Self {
        Self {
            start: format_form_date(range.start()),
            end: format_form_date(range.end()),
            csrf_token: csrf_token.to_string(),
            room_id: room_id.clone(),
        }
    }

    pub fn form_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("start", &self.start),
            ("end", &self.end),
            ("csrf_token", &self.csrf_token),
            ("room_id", self.room_id.as_str()),
        ]
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        self.form_fields()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ok: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_id: RoomId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A JSON `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AvailabilityResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Link to continue booking, built from the fields the server echoed back.
    pub fn booking_url(&self, booking_path: &str) -> Result<String, CheckError> {
        if self.room_id.as_str().is_empty() {
            return Err(CheckError::Incomplete("room_id"));
        }
        if self.start_date.is_empty() {
            return Err(CheckError::Incomplete("start_date"));
        }
        if self.end_date.is_empty() {
            return Err(CheckError::Incomplete("end_date"));
        }

        Ok(format!(
            "{}?id={}&s={}&e={}",
            booking_path,
            urlencoding::encode(self.room_id.as_str()),
            urlencoding::encode(&self.start_date),
            urlencoding::encode(&self.end_date),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityOutcome {
    Available { booking_url: String },
    Unavailable { message: Option<String> },
    Failed { reason: String },
}

impl AvailabilityOutcome {
    pub fn from_result(
        result: Result<AvailabilityResponse, CheckError>,
        booking_path: &str,
    ) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(err) => return AvailabilityOutcome::Failed { reason: err.to_string() },
        };

        if !response.ok {
            return AvailabilityOutcome::Unavailable { message: response.message };
        }

        match response.booking_url(booking_path) {
            Ok(booking_url) => AvailabilityOutcome::Available { booking_url },
            Err(err) => AvailabilityOutcome::Failed { reason: err.to_string() },
        }
    }
}
