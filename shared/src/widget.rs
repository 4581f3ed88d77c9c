//! The booking calendar controller.
//!
//! [`CalendarWidget`] owns the view state and the checkout status and
//! drives the two backend calls. It knows nothing about markup: the UI
//! registers a change listener, calls [`CalendarWidget::render`] whenever it
//! fires, and forwards clicks back.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::calendar::{build_month_grid, DayStatus, IsoDate, MonthCursor, MonthGrid};
use crate::error::{ApiError, SelectError};
use crate::traits::{BookingApi, Clock, Navigator};
use crate::{BookedDatesResponse, CheckoutSessionRequest, CheckoutSessionResponse};

pub const IN_PROGRESS_MESSAGE: &str = "Redirecting to secure checkout...";
pub const CHECKOUT_FALLBACK_MESSAGE: &str = "Could not create checkout session.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Try again.";

/// Displayed month plus the dates known to be taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current_month: MonthCursor,
    pub booked_dates: BTreeSet<IsoDate>,
}

impl ViewState {
    pub fn new(current_month: MonthCursor) -> Self {
        Self {
            current_month,
            booked_dates: BTreeSet::new(),
        }
    }

    /// Merge a server response, returning how many entries were malformed
    pub fn merge_booked(&mut self, response: &BookedDatesResponse) -> usize {
        let mut rejected = 0;
        for entry in response.entries() {
            let Some(raw) = entry.as_str() else {
                log::warn!("Ignoring non-string booked date entry: {}", entry);
                rejected += 1;
                continue;
            };
            match raw.parse::<IsoDate>() {
                Ok(date) => {
                    self.booked_dates.insert(date);
                }
                Err(e) => {
                    log::warn!("Ignoring booked date entry: {}", e);
                    rejected += 1;
                }
            }
        }
        rejected
    }
}

/// State of the status message region below the grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutStatus {
    #[default]
    Idle,
    InProgress,
    /// Terminal: the page is navigating away
    Redirecting(String),
    Error(String),
}

impl CheckoutStatus {
    /// Resolve what the checkout endpoint answered into the next status
    pub fn from_response(result: Result<Option<CheckoutSessionResponse>, ApiError>) -> Self {
        match result {
            Ok(Some(CheckoutSessionResponse { checkout_url: Some(url), .. })) if !url.is_empty() => {
                CheckoutStatus::Redirecting(url)
            }
            Ok(Some(response)) => CheckoutStatus::Error(
                response
                    .error_message()
                    .unwrap_or_else(|| CHECKOUT_FALLBACK_MESSAGE.to_string()),
            ),
            Ok(None) => CheckoutStatus::Error(CHECKOUT_FALLBACK_MESSAGE.to_string()),
            Err(e) => {
                log::error!("Checkout request failed: {}", e);
                CheckoutStatus::Error(NETWORK_ERROR_MESSAGE.to_string())
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CheckoutStatus::Idle => None,
            CheckoutStatus::InProgress | CheckoutStatus::Redirecting(_) => Some(IN_PROGRESS_MESSAGE),
            CheckoutStatus::Error(message) => Some(message),
        }
    }
}

type ChangeListener = Rc<dyn Fn()>;

/// Single-threaded booking calendar.
///
/// Cloning is cheap and every clone shares the same state, so async tasks
/// can hold their own handle. No `RefCell` borrow is ever held across an
/// `.await`.
#[derive(Clone)]
pub struct CalendarWidget {
    view: Rc<RefCell<ViewState>>,
    status: Rc<RefCell<CheckoutStatus>>,
    on_change: Rc<RefCell<Option<ChangeListener>>>,
    api: Rc<dyn BookingApi>,
    clock: Rc<dyn Clock>,
    navigator: Rc<dyn Navigator>,
}

impl CalendarWidget {
    /// Starts on the month containing `clock.today()` with no known bookings
    pub fn new(api: Rc<dyn BookingApi>, clock: Rc<dyn Clock>, navigator: Rc<dyn Navigator>) -> Self {
        let current_month = MonthCursor::containing(clock.today());
        Self {
            view: Rc::new(RefCell::new(ViewState::new(current_month))),
            status: Rc::new(RefCell::new(CheckoutStatus::Idle)),
            on_change: Rc::new(RefCell::new(None)),
            api,
            clock,
            navigator,
        }
    }

    /// Register the re-render hook, replacing any previous one
    pub fn set_on_change(&self, listener: impl Fn() + 'static) {
        *self.on_change.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn clear_on_change(&self) {
        self.on_change.borrow_mut().take();
    }

    pub fn view(&self) -> ViewState {
        self.view.borrow().clone()
    }

    pub fn status(&self) -> CheckoutStatus {
        self.status.borrow().clone()
    }

    /// Full grid for the current month. Pure: calling it twice without a
    /// state change in between yields the same grid.
    pub fn render(&self) -> MonthGrid {
        let view = self.view.borrow();
        build_month_grid(view.current_month, self.clock.today(), &view.booked_dates)
    }

    /// Fetch booked dates and merge them in. Failure is logged and the
    /// calendar renders with whatever it already knows.
    pub async fn load_booked_dates(&self) {
        match self.api.booked_dates().await {
            Ok(response) => {
                let rejected = self.view.borrow_mut().merge_booked(&response);
                log::info!(
                    "Loaded {} booked dates ({} rejected)",
                    response.entries().len() - rejected,
                    rejected
                );
            }
            Err(e) => {
                log::warn!("Failed to fetch booked dates: {}", e);
            }
        }
        self.notify();
    }

    pub fn show_previous_month(&self) {
        self.move_to(MonthCursor::previous);
    }

    pub fn show_next_month(&self) {
        self.move_to(MonthCursor::next);
    }

    fn move_to(&self, step: impl FnOnce(&MonthCursor) -> MonthCursor) {
        {
            let mut view = self.view.borrow_mut();
            view.current_month = step(&view.current_month);
            log::debug!("Showing {}", view.current_month.title());
        }
        self.notify();
    }

    /// Start checkout for `date`.
    ///
    /// Only dates currently classified as available are accepted; anything
    /// else is rejected before a request is made. Overlapping calls are not
    /// de-duplicated: whichever response arrives last owns the status.
    pub async fn select_date(&self, date: IsoDate) -> Result<(), SelectError> {
        let status = {
            let view = self.view.borrow();
            DayStatus::classify(date, self.clock.today(), &view.booked_dates)
        };
        if !status.is_selectable() {
            return Err(SelectError::NotSelectable { date, status });
        }

        log::info!("Starting checkout for {}", date);
        self.set_status(CheckoutStatus::InProgress);

        let request = CheckoutSessionRequest { date };
        let result = self.api.create_checkout_session(&request).await;

        let next = CheckoutStatus::from_response(result);
        let redirect = match &next {
            CheckoutStatus::Redirecting(url) => Some(url.clone()),
            _ => None,
        };
        self.set_status(next);

        if let Some(url) = redirect {
            self.navigator.redirect(&url);
        }
        Ok(())
    }

    fn set_status(&self, status: CheckoutStatus) {
        *self.status.borrow_mut() = status;
        self.notify();
    }

    fn notify(&self) {
        let listener = self.on_change.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}
