//! WASM entry point.
//!
//! ERROR HANDLING
//! ==============
//! A page without a window or document (workers, detached frames) logs one
//! error and stays unenhanced; nothing is thrown back to the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

use crate::config::{PageContext, is_document_loading};
use crate::dom::BrowserDom;
use crate::enhance::enhance_page;
use crate::schedule::TimeoutScheduler;
use crate::store::LocalStore;
use crate::sync::HttpSync;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("failed to register DOMContentLoaded listener")]
    Listener,
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = when_ready() {
        log::error!("page enhancements disabled: {e}");
    }
}

fn when_ready() -> Result<(), BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;

    if !is_document_loading(&document.ready_state()) {
        run(window, document);
        return Ok(());
    }

    let target = document.clone();
    let cb = Closure::once(move || run(window, target));
    document
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        .map_err(|_| BootError::Listener)?;
    cb.forget();
    Ok(())
}

fn run(window: Window, document: Document) {
    let context = PageContext::from_window();
    let dom = BrowserDom::new(window, document);
    let report = enhance_page(&dom, &LocalStore::open(), &HttpSync, &TimeoutScheduler, context);
    log::info!(
        "page enhanced (authenticated={}, theme={}, blur={})",
        context.authenticated,
        report.theme.as_str(),
        report.blur_enabled
    );
}
