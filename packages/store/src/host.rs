//! Side effects the helpers need from the hosting page.
//!
//! The browser implementations live in the `ui` crate; tests use recording fakes.

/// Shows a blocking, user-facing message (`window.alert` on the web).
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Performs a hard navigation to another page.
pub trait Navigator {
    fn navigate(&self, path: &str);
}
