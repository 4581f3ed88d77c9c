use std::rc::Rc;

use shared::{CalendarWidget, CheckoutStatus, IsoDate, MonthGrid};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::CalendarConfig;
use crate::services::api::ApiClient;
use crate::services::date_utils::BrowserClock;
use crate::services::navigation::BrowserNavigator;

pub struct UseBookingCalendarResult {
    pub grid: MonthGrid,
    pub status: CheckoutStatus,
    pub actions: UseBookingCalendarActions,
}

#[derive(Clone)]
pub struct UseBookingCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub select_date: Callback<IsoDate>,
}

#[hook]
pub fn use_booking_calendar(config: &CalendarConfig) -> UseBookingCalendarResult {
    let widget = use_memo(config.clone(), |config| {
        CalendarWidget::new(
            Rc::new(ApiClient::new(config)),
            Rc::new(BrowserClock),
            Rc::new(BrowserNavigator),
        )
    });
    let force_update = use_force_update();

    // Re-render on every widget state change and load availability once
    {
        let widget = (*widget).clone();
        use_effect_with(config.clone(), move |_| {
            widget.set_on_change(move || force_update.force_update());

            let loader = widget.clone();
            spawn_local(async move {
                loader.load_booked_dates().await;
            });

            move || widget.clear_on_change()
        });
    }

    let prev_month = {
        let widget = widget.clone();
        Callback::from(move |_: MouseEvent| widget.show_previous_month())
    };

    let next_month = {
        let widget = widget.clone();
        Callback::from(move |_: MouseEvent| widget.show_next_month())
    };

    let select_date = {
        let widget = widget.clone();
        Callback::from(move |date: IsoDate| {
            let widget = (*widget).clone();
            spawn_local(async move {
                if let Err(e) = widget.select_date(date).await {
                    log::warn!("{}", e);
                }
            });
        })
    };

    UseBookingCalendarResult {
        grid: widget.render(),
        status: widget.status(),
        actions: UseBookingCalendarActions {
            prev_month,
            next_month,
            select_date,
        },
    }
}
