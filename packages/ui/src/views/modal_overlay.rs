use dioxus::prelude::*;

/// A Bootstrap-styled modal dialog rendered in place.
/// Clicking the backdrop or the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop fade show",
        }
        div {
            class: "modal fade show d-block",
            tabindex: "-1",
            role: "dialog",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-dialog modal-lg modal-dialog-centered",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-content",
                    div {
                        class: "modal-header",
                        h5 { class: "modal-title", "{title}" }
                        button {
                            r#type: "button",
                            class: "btn-close",
                            "aria-label": "Close",
                            onclick: move |_| on_close.call(()),
                        }
                    }
                    div {
                        class: "modal-body",
                        {children}
                    }
                }
            }
        }
    }
}
