use log::LevelFilter;
use web_sys::Element;

/// Id of the element the calendar mounts into
pub const DEFAULT_CONTAINER_ID: &str = "calendar";
pub const DEFAULT_BOOKED_DATES_URL: &str = "/api/booked-dates";
pub const DEFAULT_CHECKOUT_URL: &str = "/create-checkout-session";

/// Runtime settings for the calendar.
///
/// Defaults can be overridden per page with data attributes on the
/// container element:
///
/// ```html
/// <div id="calendar"
///      data-booked-dates-url="/api/booked-dates"
///      data-checkout-url="/create-checkout-session"
///      data-log-level="debug"></div>
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarConfig {
    pub booked_dates_url: String,
    pub checkout_url: String,
    pub log_level: LevelFilter,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            booked_dates_url: DEFAULT_BOOKED_DATES_URL.to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl CalendarConfig {
    pub fn from_element(element: &Element) -> Self {
        let defaults = Self::default();
        let attribute = |name: &str| {
            element
                .get_attribute(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            booked_dates_url: attribute("data-booked-dates-url").unwrap_or(defaults.booked_dates_url),
            checkout_url: attribute("data-checkout-url").unwrap_or(defaults.checkout_url),
            log_level: attribute("data-log-level")
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
