use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::booking_calendar::BookingCalendar;
use config::{CalendarConfig, DEFAULT_CONTAINER_ID};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: CalendarConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <BookingCalendar config={props.config.clone()} />
    }
}

fn main() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    // Pages without a calendar container load the bundle harmlessly
    let Some(container) = document.get_element_by_id(DEFAULT_CONTAINER_ID) else {
        return;
    };

    let config = CalendarConfig::from_element(&container);
    services::logging::init(config.log_level);
    log::info!("Mounting booking calendar into #{}", DEFAULT_CONTAINER_ID);

    yew::Renderer::<App>::with_root_and_props(container, AppProps { config }).render();
}
