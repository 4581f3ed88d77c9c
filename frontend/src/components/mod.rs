pub mod booking_calendar;
pub mod calendar;
