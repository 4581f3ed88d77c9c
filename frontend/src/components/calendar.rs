use shared::calendar::WEEKDAY_LABELS;
use shared::{DayStatus, GridCell, IsoDate, MonthGrid};
use yew::prelude::*;

const DAY_BASE_CLASS: &str = "p-2 rounded-xl border text-sm transition border-white/15";

fn day_class(status: DayStatus) -> String {
    let modifier = match status {
        DayStatus::Booked => "bg-red-900/30 cursor-not-allowed opacity-60",
        DayStatus::Past | DayStatus::Today => "bg-white/5 cursor-not-allowed opacity-50",
        DayStatus::Available => "bg-green-900/20 hover:scale-[1.03]",
    };
    format!("{} {}", DAY_BASE_CLASS, modifier)
}

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    pub grid: MonthGrid,
    pub on_select: Callback<IsoDate>,
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    let cells = props.grid.cells.iter().map(|cell| match cell {
        GridCell::Blank => html! { <div></div> },
        GridCell::Day(day) => {
            let onclick = day.status.is_selectable().then(|| {
                let on_select = props.on_select.clone();
                let date = day.date;
                Callback::from(move |_: MouseEvent| on_select.emit(date))
            });

            html! {
                <button
                    class={day_class(day.status)}
                    title={day.status.label()}
                    disabled={!day.status.is_selectable()}
                    data-date={day.iso()}
                    {onclick}
                >
                    {day.day()}
                </button>
            }
        }
    });

    html! {
        <>
            <div class="grid grid-cols-7 text-center text-sm font-medium mb-1 text-white/70">
                {for WEEKDAY_LABELS.iter().map(|label| html! { <div>{*label}</div> })}
            </div>
            <div class="grid grid-cols-7 gap-2">
                {for cells}
            </div>
        </>
    }
}
