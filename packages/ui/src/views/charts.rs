use api::{CasesTimeline, StatsClient};
use dioxus::prelude::*;

use crate::remote::{use_remote, FetchErrorMessage, LoadingPlaceholder, RemoteState};
use crate::{use_dashboard_config, CasesChart};

const CHART_CSS: Asset = asset!("/assets/styling/chart.css");

/// Worldwide cases over time, fetched once per visit.
#[component]
pub fn ChartsView() -> Element {
    let config = use_dashboard_config();
    let state = use_remote("cases", move || {
        let client = StatsClient::from_config(&config.api);
        let lastdays = config.api.lastdays.clone();
        async move { client.historical_all(&lastdays).await }
    });

    rsx! {
        ChartsPanel { state }
    }
}

#[component]
pub fn ChartsPanel(state: RemoteState<CasesTimeline>) -> Element {
    match state {
        RemoteState::Loading => rsx! { LoadingPlaceholder {} },
        RemoteState::Failed => rsx! { FetchErrorMessage {} },
        RemoteState::Ready(timeline) => rsx! {
            document::Stylesheet { href: CHART_CSS }
            div {
                class: "view charts-view",
                h1 { class: "view-title", "COVID-19 Cases Fluctuations" }
                div {
                    class: "card",
                    CasesChart { points: timeline.cases }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::TimelinePoint;

    #[test]
    fn test_ready_renders_the_series() {
        let timeline: CasesTimeline =
            serde_json::from_str(r#"{"cases": {"2021-01-01": 10, "2021-01-02": 12}}"#).unwrap();
        assert_eq!(
            timeline.cases,
            vec![TimelinePoint::new("2021-01-01", 10), TimelinePoint::new("2021-01-02", 12)]
        );

        let html = dioxus_ssr::render_element(rsx! {
            ChartsPanel { state: RemoteState::Ready(timeline) }
        });

        assert_eq!(html.matches("class=\"chart-point\"").count(), 2);
        assert!(!html.contains("Error fetching data."));
    }

    #[test]
    fn test_failed_renders_error_only() {
        let html = dioxus_ssr::render_element(rsx! {
            ChartsPanel { state: RemoteState::Failed }
        });

        assert!(html.contains("Error fetching data."));
        assert!(!html.contains("cases-chart"));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn test_loading_renders_placeholder() {
        let html = dioxus_ssr::render_element(rsx! {
            ChartsPanel { state: RemoteState::Loading }
        });

        assert!(html.contains("Loading..."));
        assert!(!html.contains("cases-chart"));
    }
}
