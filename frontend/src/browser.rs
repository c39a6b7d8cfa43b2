// Browser-backed implementations of the confirm/navigate seams

use gloo::console;
use library_clients_shared::csrf::{token_from_cookies, CSRF_COOKIE_NAME};
use library_clients_shared::{Confirm, Navigate};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

const CSRF_META_SELECTOR: &str = "meta[name=\"csrf-token\"]";

/// The live browser window: native `confirm()` and `location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWindow;

impl Confirm for BrowserWindow {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}

impl Navigate for BrowserWindow {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            console::error!("Cannot navigate: no browser window");
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            console::error!(format!("Navigation to {} failed", url), e);
        }
    }
}

/// Reads the anti-forgery token from the `csrftoken` cookie, falling back to
/// a `<meta name="csrf-token">` tag.
pub fn read_csrf_token(document: &Document) -> Option<String> {
    document
        .dyn_ref::<HtmlDocument>()
        .and_then(|html| html.cookie().ok())
        .and_then(|cookies| token_from_cookies(&cookies, CSRF_COOKIE_NAME))
        .or_else(|| {
            document
                .query_selector(CSRF_META_SELECTOR)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty())
        })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_meta_tag_fallback() {
        let document = gloo::utils::document();
        let head = document.head().unwrap();
        let meta = document.create_element("meta").unwrap();
        meta.set_attribute("name", "csrf-token").unwrap();
        meta.set_attribute("content", " meta-token ").unwrap();
        head.append_child(&meta).unwrap();

        assert_eq!(read_csrf_token(&document).as_deref(), Some("meta-token"));

        head.remove_child(&meta).unwrap();
    }
}
