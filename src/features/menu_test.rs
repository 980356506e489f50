use super::*;
use crate::dom::MemoryDom;
use crate::testing::page;

#[test]
fn toggle_click_flips_active_class() {
    let page = page();
    assert!(install(&page.dom));

    page.dom.dispatch(page.menu_toggle, "click");
    assert!(page.dom.has_class(&page.nav_list, MENU_ACTIVE_CLASS));

    page.dom.dispatch(page.menu_toggle, "click");
    assert!(!page.dom.has_class(&page.nav_list, MENU_ACTIVE_CLASS));
}

#[test]
fn missing_toggle_installs_nothing() {
    let dom = MemoryDom::new();
    assert!(!install(&dom));
}

#[test]
fn toggle_without_nav_list_is_harmless() {
    let dom = MemoryDom::new();
    let toggle = dom.append(dom.body_id(), "button", &[("class", "menu-toggle")]);
    assert!(install(&dom));
    assert_eq!(dom.dispatch(toggle, "click"), EventVerdict::Proceed);
}
