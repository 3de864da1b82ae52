use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaAddressBook, FaBars, FaChartLine, FaEarthAmericas, FaXmark};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// The three top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavItem {
    Contacts,
    Charts,
    Maps,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Contacts, NavItem::Charts, NavItem::Maps];

    pub fn path(self) -> &'static str {
        match self {
            NavItem::Contacts => "/",
            NavItem::Charts => "/charts",
            NavItem::Maps => "/maps",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Contacts => "Contact",
            NavItem::Charts => "Charts",
            NavItem::Maps => "Maps",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        NavItem::ALL
            .into_iter()
            .find(|item| item.path().trim_end_matches('/') == path)
    }
}

/// Small-screen open/closed state of the side menu. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

fn nav_icon(item: NavItem) -> Element {
    match item {
        NavItem::Contacts => rsx! { Icon { icon: FaAddressBook, width: 14, height: 14 } },
        NavItem::Charts => rsx! { Icon { icon: FaChartLine, width: 14, height: 14 } },
        NavItem::Maps => rsx! { Icon { icon: FaEarthAmericas, width: 14, height: 14 } },
    }
}

/// Persistent side menu. Platform packages turn `on_navigate` into a route change.
#[component]
pub fn AppSidebar(active: NavItem, on_navigate: EventHandler<NavItem>) -> Element {
    let mut menu = use_signal(MenuState::default);
    let open = menu().is_open();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        button {
            class: "sidebar-trigger",
            title: if open { "Close menu" } else { "Open menu" },
            onclick: move |_| menu.write().toggle(),
            if open {
                Icon { icon: FaXmark, width: 18, height: 18 }
            } else {
                Icon { icon: FaBars, width: 18, height: 18 }
            }
        }

        nav {
            class: if open { "sidebar open" } else { "sidebar" },
            div {
                class: "sidebar-header",
                h2 { "Menu" }
                button {
                    class: "sidebar-close",
                    title: "Close menu",
                    onclick: move |_| menu.write().close(),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }
            ul {
                class: "sidebar-links",
                for item in NavItem::ALL {
                    li {
                        key: "{item.path()}",
                        a {
                            class: if item == active { "sidebar-link active" } else { "sidebar-link" },
                            href: item.path(),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                menu.write().close();
                                on_navigate.call(item);
                            },
                            {nav_icon(item)}
                            span { "{item.label()}" }
                        }
                    }
                }
            }
        }

        if open {
            div {
                class: "sidebar-overlay",
                onclick: move |_| menu.write().close(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(NavItem::Contacts.path(), "/");
        assert_eq!(NavItem::Charts.path(), "/charts");
        assert_eq!(NavItem::Maps.path(), "/maps");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(NavItem::from_path("/"), Some(NavItem::Contacts));
        assert_eq!(NavItem::from_path("/charts"), Some(NavItem::Charts));
        assert_eq!(NavItem::from_path("/maps/"), Some(NavItem::Maps));
        assert_eq!(NavItem::from_path("/settings"), None);
    }

    #[test]
    fn test_menu_starts_closed_and_toggles() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_renders_all_links() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                AppSidebar { active: NavItem::Charts, on_navigate: move |_| {} }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("class=\"sidebar-link\"").count(), 2);
        assert_eq!(html.matches("class=\"sidebar-link active\"").count(), 1);
        assert!(!html.contains("sidebar-overlay"));
    }
}
