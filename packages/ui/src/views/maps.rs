use api::{Country, StatsClient};
use dioxus::prelude::*;
use store::MapConfig;

use crate::remote::{use_remote, FetchErrorMessage, LoadingPlaceholder, RemoteState};
use crate::{use_dashboard_config, CountryMap};

const MAP_CSS: Asset = asset!("/assets/styling/map.css");

/// Current statistics per country on a world map, fetched once per visit.
#[component]
pub fn MapsView() -> Element {
    let config = use_dashboard_config();
    let map = config.map.clone();
    let state = use_remote("countries", move || {
        let client = StatsClient::from_config(&config.api);
        async move { client.countries().await }
    });

    rsx! {
        MapsPanel { state, map }
    }
}

#[component]
pub fn MapsPanel(state: RemoteState<Vec<Country>>, map: MapConfig) -> Element {
    match state {
        RemoteState::Loading => rsx! { LoadingPlaceholder {} },
        RemoteState::Failed => rsx! { FetchErrorMessage {} },
        RemoteState::Ready(countries) => rsx! {
            document::Stylesheet { href: MAP_CSS }
            div {
                class: "view maps-view",
                h1 { class: "view-title", "COVID-19 Cases by Country" }
                div {
                    class: "card",
                    CountryMap { countries, map }
                }
            }
        },
    }
}
