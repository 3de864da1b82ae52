//! Root context for the dashboard.

use dioxus::prelude::*;
use store::{ContactStore, DashboardConfig};

use crate::activity_log::ActivityLog;

/// Provides the state every view relies on:
///
/// - `DashboardConfig` (read with [`use_dashboard_config`])
/// - `Signal<ActivityLog>` (read with [`crate::use_activity_log`])
/// - `Signal<ContactStore>` (read with [`crate::use_contacts`])
///
/// The contact store lives exactly as long as this component, i.e. the page.
#[component]
pub fn DashboardProvider(config: DashboardConfig, children: Element) -> Element {
    use_context_provider(|| config.clone());
    use_context_provider(|| Signal::new(ActivityLog::default()));
    use_context_provider(|| Signal::new(ContactStore::new()));

    rsx! {
        {children}
    }
}

pub fn use_dashboard_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}
