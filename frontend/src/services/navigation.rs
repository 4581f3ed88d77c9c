use shared::Navigator;

/// Sends the browser to the checkout page
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window available to redirect to {}", url);
            return;
        };

        if let Err(e) = window.location().set_href(url) {
            log::error!("Failed to redirect to {}: {:?}", url, e);
        }
    }
}
