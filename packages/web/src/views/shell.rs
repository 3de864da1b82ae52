use dioxus::prelude::*;

use ui::views::ShellLayoutView;
use ui::NavItem;

use crate::Route;

/// Persistent layout around every page: maps the current route onto the
/// side menu and menu clicks onto the router.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    let active = route.nav_item().unwrap_or(NavItem::Contacts);

    rsx! {
        ShellLayoutView {
            active,
            on_navigate: move |item: NavItem| {
                nav.push(Route::from_nav(item));
            },
            Outlet::<Route> {}
        }
    }
}
