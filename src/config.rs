//! Page context and the DOM contract the enhancements rely on.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server templates render elements with fixed class/id names and set
//! `window.isAuthenticated`. The names live here so features and tests agree
//! on one contract; the page global is read once at boot into [`PageContext`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Delay between page-ready and the start of the flash-message fade.
pub const FLASH_DISMISS_DELAY_MS: u32 = 3000;
/// Length of the flash-message fade before removal.
pub const FLASH_FADE_MS: u32 = 500;
pub const FLASH_FADE_TRANSITION: &str = "opacity 0.5s ease-out";

/// Height of the fixed header subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this? This action cannot be undone.";
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required.";

pub const FLASH_SELECTOR: &str = ".flash-message";
pub const DANGER_BUTTON_SELECTOR: &str = ".btn-danger";
pub const FORM_SELECTOR: &str = "form";
pub const FORM_FIELD_SELECTOR: &str = ".form-input";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_LIST_SELECTOR: &str = ".nav ul";
pub const THEME_MODE_SELECTOR: &str = "input[name=\"theme_preference\"]";

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const BLUR_TOGGLE_ID: &str = "blur-effect-toggle";

pub const INVALID_CLASS: &str = "is-invalid";
pub const FEEDBACK_CLASS: &str = "invalid-feedback";
pub const MENU_ACTIVE_CLASS: &str = "active";
pub const DARK_THEME_CLASS: &str = "dark-theme";
pub const NO_BLUR_CLASS: &str = "no-blur-effect";

/// Attribute holding the stable key the validator assigns to each field.
pub const FIELD_KEY_ATTR: &str = "data-field-key";

/// Surfaces rendered with the frosted-glass treatment.
pub const GLASS_SELECTORS: [&str; 4] = [".header", ".glass-container", ".posts-container", ".post-card"];

/// Comma-joined selector list matching every glass surface.
pub fn glass_selector() -> String {
    GLASS_SELECTORS.join(", ")
}

/// Whether `document.readyState` means the DOM is still being parsed.
///
/// `interactive` and `complete` both mean the hooks are already in place.
pub fn is_document_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Page-level facts the surrounding template provides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Whether a user is signed in; gates remote preference sync.
    pub authenticated: bool,
}

impl PageContext {
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }

    /// Read `window.isAuthenticated` using JS truthiness.
    ///
    /// A missing window or global means unauthenticated.
    #[cfg(feature = "hydrate")]
    pub fn from_window() -> Self {
        let authenticated = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str("isAuthenticated")).ok())
            .is_some_and(|flag| flag.is_truthy());
        Self { authenticated }
    }
}
