use dioxus::prelude::*;

/// Oldest entries are dropped past this many.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Info => "activity-log-entry info",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Error => "activity-log-entry error",
        }
    }
}

/// What an entry is about. The panel shows one section per topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTopic {
    Contacts,
    RemoteData,
}

impl LogTopic {
    pub const ALL: [LogTopic; 2] = [LogTopic::Contacts, LogTopic::RemoteData];

    pub fn title(self) -> &'static str {
        match self {
            LogTopic::Contacts => "Contacts",
            LogTopic::RemoteData => "Remote data",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub topic: LogTopic,
    pub level: LogLevel,
    pub message: String,
}

/// In-app record of what the user did and how the remote fetches went.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, topic: LogTopic, level: LogLevel, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            topic,
            level,
            message: message.into(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    /// Entries about `topic`, newest first.
    pub fn recent(&self, topic: LogTopic) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().filter(move |e| e.topic == topic)
    }

    pub fn has_problems(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.level, LogLevel::Warning | LogLevel::Error))
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(
    log: &mut Signal<ActivityLog>,
    topic: LogTopic,
    level: LogLevel,
    message: &str,
) {
    log.write().push(topic, level, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (h, m, s) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}
