use super::*;
use crate::config::DARK_THEME_CLASS;
use crate::dom::MemoryDom;
use crate::prefs::THEME_KEY;
use crate::store::MemoryStore;
use crate::testing::{Page, RecordingSync, page};

struct Harness {
    page: Page,
    store: MemoryStore,
    sync: RecordingSync,
}

fn harness() -> Harness {
    let page = page();
    let store = MemoryStore::new();
    let sync = RecordingSync::default();
    let switch = ThemeSwitch::new(page.dom.clone(), store.clone(), sync.clone());
    super::super::theme::install(&switch);
    assert_eq!(install(&switch), 3);
    Harness { page, store, sync }
}

fn choose(h: &Harness, radio: crate::dom::NodeId) {
    h.page.dom.set_checked(&radio, true);
    h.page.dom.dispatch(radio, "change");
}

fn body_is_dark(dom: &MemoryDom) -> bool {
    dom.has_class(&dom.body_id(), DARK_THEME_CLASS)
}

#[test]
fn dark_mode_forces_dark_and_keeps_store_in_sync() {
    let h = harness();
    choose(&h, h.page.mode_dark);

    assert!(body_is_dark(&h.page.dom));
    assert!(h.page.dom.is_checked(&h.page.theme_toggle));
    assert_eq!(h.store.get(THEME_MODE_KEY).as_deref(), Some("dark"));
    assert_eq!(h.store.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(h.sync.updates(), vec![PreferenceUpdate::ThemePreference { theme_preference: ThemeMode::Dark }]);
}

#[test]
fn light_mode_forces_light() {
    let h = harness();
    h.page.dom.set_prefers_dark(true);
    choose(&h, h.page.mode_light);

    assert!(!body_is_dark(&h.page.dom));
    assert!(!h.page.dom.is_checked(&h.page.theme_toggle));
    assert_eq!(h.store.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn system_mode_reads_os_scheme_at_selection_time() {
    let h = harness();
    h.page.dom.set_prefers_dark(false);
    choose(&h, h.page.mode_system);
    assert!(!body_is_dark(&h.page.dom));

    h.page.dom.set_prefers_dark(true);
    assert!(!body_is_dark(&h.page.dom));

    choose(&h, h.page.mode_system);
    assert!(body_is_dark(&h.page.dom));
    assert_eq!(h.store.get(THEME_MODE_KEY).as_deref(), Some("system"));
}

#[test]
fn mode_selection_overrides_last_toggle() {
    let h = harness();
    h.page.dom.set_checked(&h.page.theme_toggle, true);
    h.page.dom.dispatch(h.page.theme_toggle, "change");
    assert!(body_is_dark(&h.page.dom));

    choose(&h, h.page.mode_light);
    assert!(!body_is_dark(&h.page.dom));
    assert_eq!(h.store.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn unknown_mode_value_is_stored_as_light() {
    let h = harness();
    let switch = ThemeSwitch::new(h.page.dom.clone(), h.store.clone(), h.sync.clone());
    assert_eq!(select_mode(&switch, "sepia"), Theme::Light);
    assert_eq!(h.store.get(THEME_MODE_KEY).as_deref(), Some("light"));
}
