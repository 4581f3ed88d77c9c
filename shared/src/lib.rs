use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod calendar;
pub mod error;
pub mod traits;
pub mod widget;

pub use calendar::{build_month_grid, DayCell, DayStatus, GridCell, IsoDate, MonthCursor, MonthGrid};
pub use error::{ApiError, SelectError};
pub use traits::{BookingApi, Clock, Navigator};
pub use widget::{CalendarWidget, CheckoutStatus, ViewState};

/// Response body of the availability endpoint (`GET /api/booked-dates`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookedDatesResponse {
    /// Booked dates in YYYY-MM-DD format. A missing or null field means no
    /// bookings. Entries are kept as raw JSON so one bad entry does not
    /// discard the rest of the list.
    #[serde(default)]
    pub booked_dates: Option<Vec<Value>>,
}

impl BookedDatesResponse {
    pub fn from_dates<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            booked_dates: Some(dates.into_iter().map(|date| Value::String(date.into())).collect()),
        }
    }

    /// Raw entries as returned by the server, possibly malformed
    pub fn entries(&self) -> &[Value] {
        self.booked_dates.as_deref().unwrap_or_default()
    }
}

/// Request body of the checkout endpoint (`POST /create-checkout-session`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionRequest {
    pub date: IsoDate,
}

/// Response body of the checkout endpoint.
///
/// The server answers either with a redirect target or with an error text;
/// a body carrying neither is possible and handled by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    /// Payment page the browser should navigate to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
    /// Human-readable failure reason, shown verbatim. Decoded loosely since
    /// some servers put a code or number here instead of text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl CheckoutSessionResponse {
    pub fn redirect(url: impl Into<String>) -> Self {
        Self {
            checkout_url: Some(url.into()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            checkout_url: None,
            error: Some(Value::String(message.into())),
        }
    }

    /// Error text to display, if the server sent a usable one.
    /// Strings are taken as-is, numbers and booleans in their JSON form.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::String(message) if !message.is_empty() => Some(message.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booked_dates_response_shapes() {
        let full: BookedDatesResponse =
            serde_json::from_str(r#"{"booked_dates": ["2026-04-20", "2026-04-21"]}"#).unwrap();
        assert_eq!(full, BookedDatesResponse::from_dates(["2026-04-20", "2026-04-21"]));

        let mixed: BookedDatesResponse =
            serde_json::from_str(r#"{"booked_dates": [1, "2026-04-20", null]}"#).unwrap();
        assert_eq!(mixed.entries().len(), 3);

        let missing: BookedDatesResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.entries().is_empty());

        let null: BookedDatesResponse = serde_json::from_str(r#"{"booked_dates": null}"#).unwrap();
        assert!(null.entries().is_empty());
    }

    #[test]
    fn test_checkout_request_body() {
        let request = CheckoutSessionRequest {
            date: "2026-04-20".parse().unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"date":"2026-04-20"}"#
        );
    }

    #[test]
    fn test_checkout_response_shapes() {
        let redirect: CheckoutSessionResponse =
            serde_json::from_str(r#"{"checkout_url": "https://pay.example/x"}"#).unwrap();
        assert_eq!(redirect, CheckoutSessionResponse::redirect("https://pay.example/x"));

        let error: CheckoutSessionResponse =
            serde_json::from_str(r#"{"error": "Stripe not configured"}"#).unwrap();
        assert_eq!(error, CheckoutSessionResponse::failure("Stripe not configured"));
        assert_eq!(error.error_message().as_deref(), Some("Stripe not configured"));

        let numeric: CheckoutSessionResponse = serde_json::from_str(r#"{"error": 42}"#).unwrap();
        assert_eq!(numeric.error_message().as_deref(), Some("42"));

        let object: CheckoutSessionResponse =
            serde_json::from_str(r#"{"error": {"code": "card_declined"}}"#).unwrap();
        assert_eq!(object.error_message(), None);

        let empty: CheckoutSessionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CheckoutSessionResponse::default());

        let null: Option<CheckoutSessionResponse> = serde_json::from_str("null").unwrap();
        assert!(null.is_none());
    }
}
