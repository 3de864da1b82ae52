use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, ActivityLog, LogEntry, LogTopic};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating panel with one section per [`LogTopic`]: contact edits on top,
/// fetch progress below. Hidden until toggled.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log.read().visible {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                for topic in LogTopic::ALL {
                    TopicSection { key: "{topic.title()}", topic, log: log.read().clone() }
                }
            }
        }
    }
}

#[component]
fn TopicSection(topic: LogTopic, log: ActivityLog) -> Element {
    let entries: Vec<LogEntry> = log.recent(topic).cloned().collect();
    let count = entries.len();
    let empty = entries.is_empty();

    rsx! {
        section {
            class: "activity-log-topic",
            h3 {
                class: "activity-log-topic-title",
                "{topic.title()}"
                span { class: "activity-log-topic-count", " ({count})" }
            }
            if empty {
                div { class: "activity-log-empty", "Nothing yet." }
            }
            for entry in entries {
                div {
                    class: entry.level.css_class(),
                    span { class: "activity-log-time", "{entry.timestamp}" }
                    span { " {entry.message}" }
                }
            }
        }
    }
}

/// Round badge showing how many entries are logged; red once anything went wrong.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log.read().entries.len();
    let has_problems = log.read().has_problems();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }
        button {
            class: if has_problems { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let mut log = log.write();
                log.visible = !log.visible;
            },
            if count > 0 { "{count}" } else { "Log" }
        }
    }
}
