use chrono::NaiveDate;
use js_sys::Date;
use shared::Clock;

/// Today's date in the browser's local time zone.
///
/// Built from the local year/month/day fields rather than an ISO timestamp,
/// which would be UTC and can land on the neighbouring day.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> NaiveDate {
        let now = Date::new_0();
        let year = now.get_full_year() as i32;
        let month = now.get_month() + 1; // JavaScript months are 0-indexed
        let day = now.get_date();

        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_clock_matches_local_fields() {
        let now = Date::new_0();
        let today = BrowserClock.today();

        assert_eq!(today.year(), now.get_full_year() as i32);
        assert_eq!(today.month(), now.get_month() + 1);
        assert_eq!(today.day(), now.get_date());
    }
}
