use super::*;
use crate::dom::MemoryDom;
use crate::store::MemoryStore;
use crate::testing::{ManualScheduler, Page, RecordingSync, page};

type TestBlur = BlurToggle<MemoryDom, MemoryStore, RecordingSync, ManualScheduler>;

fn blur_for(page: &Page, store: &MemoryStore, sync: &RecordingSync, scheduler: &ManualScheduler) -> TestBlur {
    BlurToggle::new(page.dom.clone(), store.clone(), sync.clone(), scheduler.clone())
}

fn body_has_no_blur(dom: &MemoryDom) -> bool {
    dom.has_class(&dom.body_id(), NO_BLUR_CLASS)
}

#[test]
fn blur_defaults_on_without_stored_value() {
    let page = page();
    let blur = blur_for(&page, &MemoryStore::new(), &RecordingSync::default(), &ManualScheduler::default());

    assert!(install(&blur));
    assert!(!body_has_no_blur(&page.dom));
    assert!(page.dom.is_checked(&page.blur_toggle));
}

#[test]
fn stored_false_disables_blur_on_load() {
    let page = page();
    let store = MemoryStore::with_entries(&[(BLUR_EFFECT_KEY, "false")]);
    let blur = blur_for(&page, &store, &RecordingSync::default(), &ManualScheduler::default());

    assert!(!install(&blur));
    assert!(body_has_no_blur(&page.dom));
    assert!(!page.dom.is_checked(&page.blur_toggle));
}

#[test]
fn turning_blur_off_persists_and_syncs() {
    let page = page();
    let store = MemoryStore::new();
    let sync = RecordingSync::default();
    let scheduler = ManualScheduler::default();
    install(&blur_for(&page, &store, &sync, &scheduler));

    page.dom.set_checked(&page.blur_toggle, false);
    page.dom.dispatch(page.blur_toggle, "change");

    assert!(body_has_no_blur(&page.dom));
    assert_eq!(store.get(BLUR_EFFECT_KEY).as_deref(), Some("false"));
    assert_eq!(sync.updates(), vec![PreferenceUpdate::BlurEffect { blur_effect: false }]);

    page.dom.set_checked(&page.blur_toggle, true);
    page.dom.dispatch(page.blur_toggle, "change");
    assert!(!body_has_no_blur(&page.dom));
    assert_eq!(store.get(BLUR_EFFECT_KEY).as_deref(), Some("true"));
}

#[test]
fn toggle_reflows_glass_surfaces_and_restores_display() {
    let page = page();
    let scheduler = ManualScheduler::default();
    install(&blur_for(&page, &MemoryStore::new(), &RecordingSync::default(), &scheduler));

    page.dom.dispatch(page.blur_toggle, "change");

    for surface in [page.header, page.glass, page.post_card] {
        assert_eq!(page.dom.style(&surface, "display"), "none");
    }
    assert_eq!(scheduler.pending(), 3);

    scheduler.advance(0);
    assert_eq!(page.dom.style(&page.glass, "display"), "flex");
    assert_eq!(page.dom.style(&page.header, "display"), "");
    assert_eq!(page.dom.style(&page.post_card, "display"), "");
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn page_without_toggle_still_applies_stored_preference() {
    let dom = MemoryDom::new();
    let store = MemoryStore::with_entries(&[(BLUR_EFFECT_KEY, "false")]);
    let blur = BlurToggle::new(dom.clone(), store, RecordingSync::default(), ManualScheduler::default());

    assert!(!blur.has_toggle());
    install(&blur);
    assert!(body_has_no_blur(&dom));
}
