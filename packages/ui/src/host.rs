//! Platform implementations of the page side effects.
//!
//! On the web, [`BrowserPage`] talks to `window` and `document` directly and
//! [`JsModal`] wraps a JavaScript modal object (e.g. a Bootstrap `Modal`
//! instance). Native builds have no page to talk to, so [`LogHost`] records
//! the side effects in the log instead.

use store::{Navigator, Notifier};

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserPage, JsModal};

/// Notifier/Navigator for the current platform.
pub fn platform_host() -> impl Notifier + Navigator {
    #[cfg(target_arch = "wasm32")]
    {
        BrowserPage
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        LogHost
    }
}

/// Host for platforms without a browser page.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogHost;

impl Notifier for LogHost {
    fn alert(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

impl Navigator for LogHost {
    fn navigate(&self, path: &str) {
        tracing::info!("navigate to {}", path);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use store::{Navigator, Notifier};
    use wasm_bindgen::{JsCast, JsValue};

    use crate::profile::{HostPage, ModalHandle};

    /// The current browser document.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserPage;

    fn element(id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    impl Notifier for BrowserPage {
        fn alert(&self, message: &str) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
    }

    impl Navigator for BrowserPage {
        fn navigate(&self, path: &str) {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(path) {
                    tracing::error!("Failed to navigate to {}: {:?}", path, e);
                }
            }
        }
    }

    impl HostPage for BrowserPage {
        fn has_element(&self, element_id: &str) -> bool {
            element(element_id).is_some()
        }

        fn set_inner_html(&self, element_id: &str, html: &str) {
            if let Some(el) = element(element_id) {
                el.set_inner_html(html);
            }
        }
    }

    /// A JavaScript object with a `show()` method.
    pub struct JsModal(pub JsValue);

    impl ModalHandle for JsModal {
        fn show(&self) {
            let show = js_sys::Reflect::get(&self.0, &JsValue::from_str("show"))
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
            match show {
                Some(show) => {
                    if let Err(e) = show.call0(&self.0) {
                        tracing::error!("modal show() failed: {:?}", e);
                    }
                }
                None => tracing::error!("modal object has no show() method"),
            }
        }
    }
}
