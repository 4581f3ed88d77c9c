use crate::calendar::{DayStatus, IsoDate};

/// Failure talking to one of the booking endpoints.
///
/// Any of these means no usable response arrived; application-level errors
/// travel inside [`crate::CheckoutSessionResponse`] instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectError {
    #[error("{date} cannot be booked: {}", .status.label())]
    NotSelectable { date: IsoDate, status: DayStatus },
}
