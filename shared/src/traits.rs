//! # Collaborator Traits
//!
//! The widget never reaches for the network, the wall clock or the browser
//! location directly. Each is an injected capability so the browser build
//! and the tests can plug in their own implementations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ApiError;
use crate::{BookedDatesResponse, CheckoutSessionRequest, CheckoutSessionResponse};

/// The two backend endpoints the calendar talks to.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait BookingApi {
    /// Fetch the dates that are already taken
    async fn booked_dates(&self) -> Result<BookedDatesResponse, ApiError>;

    /// Ask the backend for a checkout session for `request.date`.
    /// `Ok(None)` means the server answered with a JSON `null` body.
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<Option<CheckoutSessionResponse>, ApiError>;
}

/// Source of the current local calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Moves the page to another URL
pub trait Navigator {
    fn redirect(&self, url: &str);
}
