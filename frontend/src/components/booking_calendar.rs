use yew::prelude::*;

use crate::components::calendar::CalendarGrid;
use crate::config::CalendarConfig;
use crate::hooks::use_booking_calendar::use_booking_calendar;

#[derive(Properties, PartialEq)]
pub struct BookingCalendarProps {
    pub config: CalendarConfig,
}

/// Month navigation, day grid and the checkout status line
#[function_component(BookingCalendar)]
pub fn booking_calendar(props: &BookingCalendarProps) -> Html {
    let calendar = use_booking_calendar(&props.config);
    let actions = calendar.actions;
    let title = calendar.grid.title();
    let message = calendar.status.message().unwrap_or_default().to_string();

    html! {
        <>
            <div class="flex items-center justify-between mb-4">
                <button
                    class="px-3 py-1 rounded-xl border border-white/15 text-white/80"
                    title="Previous Month"
                    onclick={actions.prev_month}
                >
                    {"←"}
                </button>
                <h2 class="text-xl font-semibold">{title}</h2>
                <button
                    class="px-3 py-1 rounded-xl border border-white/15 text-white/80"
                    title="Next Month"
                    onclick={actions.next_month}
                >
                    {"→"}
                </button>
            </div>
            <CalendarGrid grid={calendar.grid} on_select={actions.select_date} />
            <div class="mt-3 text-sm text-white/80">
                {message}
            </div>
        </>
    }
}
