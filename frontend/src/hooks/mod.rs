pub mod use_booking_calendar;
