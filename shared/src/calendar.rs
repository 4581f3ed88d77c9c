//! Calendar arithmetic and day classification for the booking calendar.
//!
//! All rendering decisions live here so the UI layer only maps a
//! [`MonthGrid`] to markup. The grid is recomputed from scratch on every
//! state change; nothing in it is patched incrementally.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Weekday header labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A local calendar date whose text form is `YYYY-MM-DD`.
///
/// Booked-date lookups compare these values, so the availability feed and
/// the rendered grid always agree on which day a string names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(NaiveDate);

impl IsoDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for IsoDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a YYYY-MM-DD date")]
pub struct InvalidIsoDate(pub String);

impl FromStr for IsoDate {
    type Err = InvalidIsoDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields, so compare against the canonical form
        NaiveDate::parse_from_str(s, ISO_FORMAT)
            .ok()
            .map(Self)
            .filter(|date| date.to_string() == s)
            .ok_or_else(|| InvalidIsoDate(s.to_string()))
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The month currently shown by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    pub year: i32,
    /// 1 = January, 12 = December
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month that contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 => if is_leap_year(self.year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the 1st (0 = Sunday, 1 = Monday, etc.)
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Heading text, e.g. "April 2026"
    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Classification of a single day.
///
/// `Past` and `Today` are both unbookable; they differ only in the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayStatus {
    Booked,
    Past,
    Today,
    Available,
}

impl DayStatus {
    /// Booked wins over past/today, which win over available
    pub fn classify(date: IsoDate, today: NaiveDate, booked: &BTreeSet<IsoDate>) -> Self {
        if booked.contains(&date) {
            DayStatus::Booked
        } else if date.date() < today {
            DayStatus::Past
        } else if date.date() == today {
            DayStatus::Today
        } else {
            DayStatus::Available
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, DayStatus::Available)
    }

    /// Explanatory label shown on the day button
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Booked => "Booked",
            DayStatus::Past => "Past date",
            DayStatus::Today => "Today (not bookable)",
            DayStatus::Available => "Available – click to checkout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: IsoDate,
    pub status: DayStatus,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn iso(&self) -> String {
        self.date.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Placeholder before the 1st so that it lands under its weekday
    Blank,
    Day(DayCell),
}

/// Everything needed to draw one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: MonthCursor,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        self.month.title()
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, GridCell::Blank))
            .count()
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| match cell {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        })
    }

    pub fn find(&self, date: IsoDate) -> Option<&DayCell> {
        self.day_cells().find(|cell| cell.date == date)
    }
}

/// Lay out `month` as a Sunday-first grid and classify every day
pub fn build_month_grid(month: MonthCursor, today: NaiveDate, booked: &BTreeSet<IsoDate>) -> MonthGrid {
    let leading = month.first_weekday() as usize;
    let days_in_month = month.days_in_month();

    let mut cells = Vec::with_capacity(leading + days_in_month as usize);
    cells.extend(std::iter::repeat(GridCell::Blank).take(leading));

    for day in 1..=days_in_month {
        if let Some(date) = IsoDate::from_ymd(month.year, month.month, day) {
            cells.push(GridCell::Day(DayCell {
                date,
                status: DayStatus::classify(date, today, booked),
            }));
        }
    }

    MonthGrid { month, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> IsoDate {
        s.parse().unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
    }

    #[test]
    fn test_iso_date_parsing_is_strict() {
        assert_eq!(date("2026-04-01").to_string(), "2026-04-01");
        assert!("2026-4-1".parse::<IsoDate>().is_err());
        assert!("2026-04-01T00:00:00Z".parse::<IsoDate>().is_err());
        assert!("2026-02-30".parse::<IsoDate>().is_err());
        assert!("".parse::<IsoDate>().is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthCursor::new(2025, 1).days_in_month(), 31);
        assert_eq!(MonthCursor::new(2025, 4).days_in_month(), 30);
        assert_eq!(MonthCursor::new(2025, 2).days_in_month(), 28);
        assert_eq!(MonthCursor::new(2024, 2).days_in_month(), 29);
        assert_eq!(MonthCursor::new(1900, 2).days_in_month(), 28);
        assert_eq!(MonthCursor::new(2000, 2).days_in_month(), 29);
    }

    #[test]
    fn test_first_weekday() {
        // April 1st 2026 is a Wednesday, February 1st 2026 a Sunday
        assert_eq!(MonthCursor::new(2026, 4).first_weekday(), 3);
        assert_eq!(MonthCursor::new(2026, 2).first_weekday(), 0);
        assert_eq!(MonthCursor::new(2025, 11).first_weekday(), 6);
    }

    #[test]
    fn test_navigation_wraps_years() {
        assert_eq!(MonthCursor::new(2025, 6).previous(), MonthCursor::new(2025, 5));
        assert_eq!(MonthCursor::new(2025, 1).previous(), MonthCursor::new(2024, 12));
        assert_eq!(MonthCursor::new(2025, 6).next(), MonthCursor::new(2025, 7));
        assert_eq!(MonthCursor::new(2025, 12).next(), MonthCursor::new(2026, 1));
    }

    #[test]
    fn test_title() {
        assert_eq!(MonthCursor::new(2026, 4).title(), "April 2026");
        assert_eq!(month_name(13), "Invalid Month");
    }

    #[test]
    fn test_grid_for_wednesday_start_thirty_day_month() {
        let grid = build_month_grid(MonthCursor::new(2026, 4), today(), &BTreeSet::new());

        assert_eq!(grid.leading_blanks(), 3);
        assert_eq!(grid.day_cells().count(), 30);
        assert_eq!(grid.cells.len(), 33);

        let days: Vec<u32> = grid.day_cells().map(DayCell::day).collect();
        assert_eq!(days, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_grid_shape_for_every_month_of_a_leap_year() {
        let mut month = MonthCursor::new(2024, 1);
        for _ in 0..12 {
            let grid = build_month_grid(month, today(), &BTreeSet::new());
            assert_eq!(grid.leading_blanks(), month.first_weekday() as usize);
            assert_eq!(grid.day_cells().count(), month.days_in_month() as usize);
            month = month.next();
        }
    }

    #[test]
    fn test_classification() {
        let booked: BTreeSet<IsoDate> = [date("2026-04-20"), date("2026-04-02")].into_iter().collect();
        let grid = build_month_grid(MonthCursor::new(2026, 4), today(), &booked);

        let status = |s: &str| grid.find(date(s)).unwrap().status;

        assert_eq!(status("2026-04-01"), DayStatus::Past);
        assert_eq!(status("2026-04-14"), DayStatus::Past);
        assert_eq!(status("2026-04-15"), DayStatus::Today);
        assert_eq!(status("2026-04-16"), DayStatus::Available);
        assert_eq!(status("2026-04-20"), DayStatus::Booked);
        // booked takes precedence over past
        assert_eq!(status("2026-04-02"), DayStatus::Booked);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DayStatus::Booked.label(), "Booked");
        assert_eq!(DayStatus::Past.label(), "Past date");
        assert_eq!(DayStatus::Today.label(), "Today (not bookable)");
        assert!(DayStatus::Available.is_selectable());
        assert!(!DayStatus::Today.is_selectable());
        assert!(!DayStatus::Past.is_selectable());
        assert!(!DayStatus::Booked.is_selectable());
    }

    #[test]
    fn test_whole_months_relative_to_today() {
        let past = build_month_grid(MonthCursor::new(2026, 3), today(), &BTreeSet::new());
        assert!(past.day_cells().all(|cell| cell.status == DayStatus::Past));

        let future = build_month_grid(MonthCursor::new(2026, 5), today(), &BTreeSet::new());
        assert!(future.day_cells().all(|cell| cell.status == DayStatus::Available));
    }
}
