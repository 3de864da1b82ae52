use dioxus::prelude::*;

use store::DashboardConfig;
use ui::{DashboardProvider, NavItem};
use views::{Charts, Contacts, Maps, NotFound, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Contacts {},
        #[route("/charts")]
        Charts {},
        #[route("/maps")]
        Maps {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Side menu entry to highlight for this route.
    fn nav_item(&self) -> Option<NavItem> {
        match self {
            Route::Contacts {} => Some(NavItem::Contacts),
            Route::Charts {} => Some(NavItem::Charts),
            Route::Maps {} => Some(NavItem::Maps),
            Route::NotFound { .. } => None,
        }
    }

    fn from_nav(item: NavItem) -> Self {
        match item {
            NavItem::Contacts => Route::Contacts {},
            NavItem::Charts => Route::Charts {},
            NavItem::Maps => Route::Maps {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled `dashboard.toml`, falling back to defaults.
fn load_config(source: &str) -> DashboardConfig {
    match DashboardConfig::from_toml(source) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("invalid {}: {e}, using defaults", DashboardConfig::filename());
            DashboardConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(DASHBOARD_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        DashboardProvider {
            config,
            Router::<Route> {}
        }
    }
}
