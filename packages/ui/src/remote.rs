//! State of a read-only view backed by one remote fetch.
//!
//! A remote view issues exactly one request when it mounts and shows one of
//! three states. The request runs inside [`use_resource`], which belongs to
//! the view's scope: when the view unmounts the task is dropped, so a late
//! response can never write into a view that is gone. Nothing is cached
//! across mounts.

use std::future::Future;

use api::FetchError;
use dioxus::prelude::*;

use crate::activity_log::{log_activity, use_activity_log, LogLevel, LogTopic};

#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    Loading,
    Failed,
    Ready(T),
}

impl<T: Clone> RemoteState<T> {
    /// `None` means the request is still outstanding.
    pub fn from_outcome<E>(outcome: Option<&Result<T, E>>) -> Self {
        match outcome {
            None => RemoteState::Loading,
            Some(Ok(value)) => RemoteState::Ready(value.clone()),
            Some(Err(_)) => RemoteState::Failed,
        }
    }
}

impl<T> RemoteState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, RemoteState::Ready(_))
    }
}

/// Run `fetch` once for this mount and report its progress.
///
/// `label` names the data in the activity log ("cases", "countries").
pub fn use_remote<T, F, Fut>(label: &'static str, mut fetch: F) -> RemoteState<T>
where
    T: Clone + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let activity_log = use_activity_log();

    let resource = use_resource(move || {
        let request = fetch();
        let mut log = activity_log;
        async move {
            let topic = LogTopic::RemoteData;
            log_activity(&mut log, topic, LogLevel::Info, &format!("Fetching {label}..."));
            let result = request.await;
            match &result {
                Ok(_) => {
                    tracing::info!("fetched {label}");
                    log_activity(&mut log, topic, LogLevel::Success, &format!("Fetched {label}"));
                }
                Err(e) => {
                    tracing::warn!("fetching {label} failed: {e}");
                    let message = format!("Fetching {label} failed: {e}");
                    log_activity(&mut log, topic, LogLevel::Error, &message);
                }
            }
            result
        }
    });

    let outcome = resource.read();
    let outcome: &Option<Result<T, FetchError>> = &outcome;
    RemoteState::from_outcome(outcome.as_ref())
}

#[component]
pub fn LoadingPlaceholder() -> Element {
    rsx! {
        div {
            class: "remote-status",
            div { class: "remote-status-text", "Loading..." }
        }
    }
}

/// The single user-visible error: no detail, no retry.
#[component]
pub fn FetchErrorMessage() -> Element {
    rsx! {
        div {
            class: "remote-status",
            div { class: "remote-status-text error", "Error fetching data." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outstanding_request_is_loading() {
        let state = RemoteState::<u32>::from_outcome::<FetchError>(None);
        assert_eq!(state, RemoteState::Loading);
        assert!(!state.is_ready());
    }

    #[test]
    fn test_success_is_ready() {
        let outcome: Result<u32, FetchError> = Ok(7);
        assert_eq!(RemoteState::from_outcome(Some(&outcome)), RemoteState::Ready(7));
    }

    #[test]
    fn test_every_failure_is_the_same_state() {
        let status: Result<u32, FetchError> = Err(FetchError::Status(503));
        let decode: Result<u32, FetchError> =
            Err(serde_json_error().into());

        assert_eq!(RemoteState::from_outcome(Some(&status)), RemoteState::Failed);
        assert_eq!(RemoteState::from_outcome(Some(&decode)), RemoteState::Failed);
        assert!(!RemoteState::from_outcome(Some(&status)).is_ready());
    }

    #[test]
    fn test_error_message_has_no_detail() {
        let html = dioxus_ssr::render_element(rsx! { FetchErrorMessage {} });
        assert!(html.contains("Error fetching data."));
        assert!(!html.contains("Loading"));
    }

    fn serde_json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("not json").unwrap_err()
    }

    mod mounted {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::time::Duration;

        use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

        use super::*;
        use crate::activity_log::ActivityLog;

        static FAILING_CALLS: AtomicUsize = AtomicUsize::new(0);
        static SUCCEEDING_CALLS: AtomicUsize = AtomicUsize::new(0);

        #[component]
        fn StateView(state: RemoteState<u32>) -> Element {
            match state {
                RemoteState::Loading => rsx! { LoadingPlaceholder {} },
                RemoteState::Failed => rsx! { FetchErrorMessage {} },
                RemoteState::Ready(value) => rsx! { div { class: "ready-value", "{value}" } },
            }
        }

        #[component]
        fn FailingFetch() -> Element {
            let state = use_remote("cases", || {
                FAILING_CALLS.fetch_add(1, Ordering::SeqCst);
                async { Err::<u32, _>(FetchError::Status(500)) }
            });
            rsx! { StateView { state } }
        }

        #[component]
        fn SucceedingFetch() -> Element {
            let state = use_remote("countries", || {
                SUCCEEDING_CALLS.fetch_add(1, Ordering::SeqCst);
                async { Ok::<u32, FetchError>(42) }
            });
            rsx! { StateView { state } }
        }

        fn failing_app() -> Element {
            use_context_provider(|| Signal::new(ActivityLog::default()));
            rsx! { FailingFetch {} }
        }

        fn succeeding_app() -> Element {
            use_context_provider(|| Signal::new(ActivityLog::default()));
            rsx! { SucceedingFetch {} }
        }

        /// Mount `app`, let its tasks finish and return every frame rendered along the way.
        async fn settle(app: fn() -> Element) -> Vec<String> {
            let mut dom = VirtualDom::new(app);
            dom.rebuild_in_place();
            let mut frames = vec![dioxus_ssr::render(&dom)];

            for _ in 0..8 {
                let woke = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
                if woke.is_err() {
                    break;
                }
                dom.render_immediate(&mut NoOpMutations);
                frames.push(dioxus_ssr::render(&dom));
            }
            frames
        }

        #[tokio::test]
        async fn test_rejected_fetch_shows_error_once() {
            let frames = settle(failing_app).await;

            let last = frames.last().unwrap();
            assert!(last.contains("Error fetching data."), "got {last}");
            assert!(frames.iter().all(|html| !html.contains("ready-value")));
            assert_eq!(FAILING_CALLS.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_successful_fetch_becomes_ready_once() {
            let frames = settle(succeeding_app).await;

            let last = frames.last().unwrap();
            assert!(last.contains("ready-value"), "got {last}");
            assert!(last.contains("42"));
            assert!(frames.iter().all(|html| !html.contains("Error fetching data.")));
            assert_eq!(SUCCEEDING_CALLS.load(Ordering::SeqCst), 1);
        }
    }
}
