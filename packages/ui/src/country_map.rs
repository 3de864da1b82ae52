//! World map with one marker per country.
//!
//! The map is a single SVG whose coordinate system is the Web Mercator world
//! at the configured zoom level (`256 * 2^zoom` units square). Tiles are drawn
//! as `<image>` elements at their pixel offsets and markers at the projected
//! country coordinates, so the whole thing scales with the container.

use std::f64::consts::PI;

use api::Country;
use dioxus::prelude::*;
use store::MapConfig;

use crate::cases_chart::format_signed_count;

pub const TILE_SIZE: f64 = 256.0;

/// Latitude at which Web Mercator becomes a square.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Tile count grows as 4^zoom; anything past this is clamped.
pub const MAX_RENDER_ZOOM: u8 = 4;

pub fn effective_zoom(zoom: u8) -> u8 {
    zoom.min(MAX_RENDER_ZOOM)
}

/// Side length of the world in map units.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << effective_zoom(zoom))
}

/// Web Mercator projection of `(lat, long)` into map units at `zoom`.
pub fn project(lat: f64, long: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let long = long.clamp(-180.0, 180.0);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (long + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Every `(x, y)` tile index covering the world at `zoom`.
pub fn tiles(zoom: u8) -> impl Iterator<Item = (u32, u32)> {
    let n = 1u32 << effective_zoom(zoom);
    (0..n).flat_map(move |y| (0..n).map(move |x| (x, y)))
}

#[derive(Clone, Debug, PartialEq)]
struct Marker {
    key: String,
    x: f64,
    y: f64,
}

#[component]
pub fn CountryMap(countries: Vec<Country>, map: MapConfig) -> Element {
    let mut selected = use_signal(|| Option::<usize>::None);

    let zoom = effective_zoom(map.zoom);
    let size = world_size(zoom);
    let tile_images: Vec<(String, f64, f64)> = tiles(zoom)
        .map(|(x, y)| {
            let href = map.tile_href(x, y);
            (href, f64::from(x) * TILE_SIZE, f64::from(y) * TILE_SIZE)
        })
        .collect();
    let markers: Vec<Marker> = countries
        .iter()
        .map(|c| {
            let (x, y) = project(c.country_info.lat, c.country_info.long, zoom);
            Marker { key: c.key(), x, y }
        })
        .collect();

    let popup = selected().and_then(|i| {
        let country = countries.get(i)?;
        let marker = markers.get(i)?;
        Some((
            country.country.clone(),
            format_signed_count(country.active),
            format_signed_count(country.recovered),
            format_signed_count(country.deaths),
            marker.x / size * 100.0,
            marker.y / size * 100.0,
        ))
    });

    rsx! {
        div {
            class: "country-map",
            svg {
                class: "country-map-svg",
                view_box: "0 0 {size} {size}",
                onclick: move |_| selected.set(None),

                for (href, x, y) in tile_images {
                    image {
                        key: "{href}",
                        "href": "{href}",
                        x: "{x}",
                        y: "{y}",
                        width: "{TILE_SIZE}",
                        height: "{TILE_SIZE}",
                    }
                }

                for (i, marker) in markers.into_iter().enumerate() {
                    circle {
                        key: "{marker.key}",
                        class: if selected() == Some(i) { "map-marker selected" } else { "map-marker" },
                        cx: "{marker.x:.1}",
                        cy: "{marker.y:.1}",
                        r: "5",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            selected.set(Some(i));
                        },
                    }
                }
            }

            if let Some((name, active, recovered, deaths, left, top)) = popup {
                div {
                    class: "map-popup",
                    style: "left: {left:.2}%; top: {top:.2}%;",
                    button {
                        class: "map-popup-close",
                        title: "Close",
                        onclick: move |_| selected.set(None),
                        "×"
                    }
                    h2 { class: "map-popup-title", "{name}" }
                    p { "Active Cases: {active}" }
                    p { "Recovered Cases: {recovered}" }
                    p { "Deaths: {deaths}" }
                }
            }
        }
    }
}
