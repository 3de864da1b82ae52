use dioxus::prelude::*;

use crate::{ActivityLogPanel, ActivityLogToggle, AppSidebar, NavItem};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Shared shell: side menu on the left, the active view on the right.
///
/// Platform packages pass the active item, a navigation callback and an
/// `Outlet` as children.
#[component]
pub fn ShellLayoutView(
    /// Item to highlight in the side menu.
    active: NavItem,
    /// Called when a menu link is activated.
    on_navigate: EventHandler<NavItem>,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div {
            class: "shell",
            AppSidebar { active, on_navigate }
            main {
                class: "shell-content",
                {children}
            }
            div {
                class: "shell-log",
                ActivityLogToggle {}
                ActivityLogPanel {}
            }
        }
    }
}
