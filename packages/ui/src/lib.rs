//! This crate contains all shared UI for the workspace.
//!
//! | Module | What it renders |
//! |--------|-----------------|
//! | [`dashboard`] | Root context provider (config, activity log, contact store) |
//! | `contacts`, `contact_form`, `contact_list` | Contact manager |
//! | [`remote`] | Loading / error / ready states of a fetched view |
//! | [`cases_chart`] | SVG line chart of a case series |
//! | [`country_map`] | Tile map with one marker per country |
//! | `sidebar` | Collapsible side menu |
//! | [`views`] | Full pages composed from the above |

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, LogTopic, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

pub mod dashboard;
pub use dashboard::{DashboardProvider, use_dashboard_config};

mod contacts;
pub use contacts::{ContactActions, use_contact_actions, use_contacts};

mod status_picker;
pub use status_picker::StatusPicker;

mod contact_form;
pub use contact_form::ContactForm;

mod contact_list;
pub use contact_list::{ContactList, RowMode};

pub mod remote;
pub use remote::{FetchErrorMessage, LoadingPlaceholder, RemoteState, use_remote};

pub mod cases_chart;
pub use cases_chart::{CasesChart, ChartGeometry};

pub mod country_map;
pub use country_map::CountryMap;

mod sidebar;
pub use sidebar::{AppSidebar, MenuState, NavItem};
