//! SVG line chart of the cumulative cases series.
//!
//! Layout is computed by [`ChartGeometry`], a pure function of the series and
//! the chart size, so the component only maps coordinates onto SVG elements.
//! Points are plotted in the order they were received.

use api::TimelinePoint;
use dioxus::prelude::*;

pub const LINE_COLOR: &str = "#8884d8";
pub const GRID_COLOR: &str = "#e5e7eb";

const TICK_COUNT: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 24.0,
            bottom: 40.0,
            left: 72.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    count: usize,
    scale_max: u64,
}

impl ChartGeometry {
    pub fn new(points: &[TimelinePoint], width: f64, height: f64) -> Self {
        let max = points.iter().map(|p| p.value).max().unwrap_or(0);
        Self {
            width,
            height,
            margin: Margin::default(),
            count: points.len(),
            scale_max: nice_ceiling(max),
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    /// Upper bound of the y axis.
    pub fn scale_max(&self) -> u64 {
        self.scale_max
    }

    /// Horizontal position of the `index`-th point. A single point is centred.
    pub fn x(&self, index: usize) -> f64 {
        let span = self.plot_right() - self.plot_left();
        if self.count <= 1 {
            return self.plot_left() + span / 2.0;
        }
        self.plot_left() + span * index as f64 / (self.count - 1) as f64
    }

    pub fn y(&self, value: u64) -> f64 {
        let span = self.plot_bottom() - self.plot_top();
        self.plot_bottom() - span * value as f64 / self.scale_max as f64
    }

    pub fn project(&self, points: &[TimelinePoint]) -> Vec<(f64, f64)> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| (self.x(i), self.y(p.value)))
            .collect()
    }

    /// The `points` attribute of an SVG `polyline`.
    pub fn polyline(&self, points: &[TimelinePoint]) -> String {
        self.project(points)
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Evenly spaced y-axis values from 0 to [`scale_max`](Self::scale_max).
    pub fn y_ticks(&self) -> Vec<u64> {
        let max = u128::from(self.scale_max);
        (0..=TICK_COUNT)
            .map(|i| (max * u128::from(i) / u128::from(TICK_COUNT)) as u64)
            .collect()
    }
}

/// Smallest 1/2/5 × 10^k that is ≥ `value` and divisible into ticks. Never 0.
pub fn nice_ceiling(value: u64) -> u64 {
    if value == 0 {
        return TICK_COUNT;
    }
    let mut magnitude = 1u64;
    while let Some(next) = magnitude.checked_mul(10).filter(|next| *next <= value) {
        magnitude = next;
    }
    for step in [1u64, 2, 5, 10] {
        let candidate = magnitude.saturating_mul(step);
        if candidate >= value {
            return candidate.max(TICK_COUNT);
        }
    }
    u64::MAX
}

/// `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// [`format_count`] with a leading `-` for negative values.
pub fn format_signed_count(value: i64) -> String {
    let digits = format_count(value.unsigned_abs());
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Axis labels: `250000000` → `"250M"`, `1500` → `"1.5K"`.
pub fn compact_count(value: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];
    for (size, suffix) in UNITS {
        if value >= size {
            let scaled = value as f64 / size as f64;
            return if scaled.fract() == 0.0 {
                format!("{scaled:.0}{suffix}")
            } else {
                format!("{scaled:.1}{suffix}")
            };
        }
    }
    value.to_string()
}

#[component]
pub fn CasesChart(
    points: Vec<TimelinePoint>,
    #[props(default = 800.0)] width: f64,
    #[props(default = 400.0)] height: f64,
) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let geometry = ChartGeometry::new(&points, width, height);
    let line = geometry.polyline(&points);
    let projected = geometry.project(&points);
    let ticks: Vec<(f64, String)> = geometry
        .y_ticks()
        .into_iter()
        .map(|t| (geometry.y(t), compact_count(t)))
        .collect();
    let (left, right, bottom) = (geometry.plot_left(), geometry.plot_right(), geometry.plot_bottom());
    let label_x = left - 8.0;
    let date_y = bottom + 20.0;
    let first_date = points.first().map(|p| p.date.clone());
    let last_date = points.last().filter(|_| points.len() > 1).map(|p| p.date.clone());
    let tooltip = hovered().and_then(|i| points.get(i).map(|p| (p.date.clone(), format_count(p.value))));

    rsx! {
        div {
            class: "cases-chart",
            svg {
                class: "cases-chart-svg",
                view_box: "0 0 {width} {height}",
                "preserveAspectRatio": "xMidYMid meet",

                for (y, label) in ticks {
                    line {
                        x1: "{left}",
                        x2: "{right}",
                        y1: "{y:.1}",
                        y2: "{y:.1}",
                        stroke: GRID_COLOR,
                        stroke_dasharray: "5 5",
                    }
                    text {
                        class: "chart-axis-label",
                        x: "{label_x}",
                        y: "{y:.1}",
                        "dy": "4",
                        text_anchor: "end",
                        "{label}"
                    }
                }

                line {
                    x1: "{left}",
                    x2: "{right}",
                    y1: "{bottom}",
                    y2: "{bottom}",
                    stroke: "#9ca3af",
                }
                if let Some(date) = first_date {
                    text {
                        class: "chart-axis-label",
                        x: "{left}",
                        y: "{date_y}",
                        text_anchor: "start",
                        "{date}"
                    }
                }
                if let Some(date) = last_date {
                    text {
                        class: "chart-axis-label",
                        x: "{right}",
                        y: "{date_y}",
                        text_anchor: "end",
                        "{date}"
                    }
                }

                polyline {
                    class: "chart-line",
                    points: "{line}",
                    fill: "none",
                    stroke: LINE_COLOR,
                    stroke_width: "2",
                }

                for (i, (x, y)) in projected.into_iter().enumerate() {
                    circle {
                        key: "{i}",
                        class: "chart-point",
                        cx: "{x:.1}",
                        cy: "{y:.1}",
                        r: "4",
                        onmouseenter: move |_| hovered.set(Some(i)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }
            }

            if let Some((date, count)) = tooltip {
                div {
                    class: "chart-tooltip",
                    div { class: "chart-tooltip-date", "{date}" }
                    div {
                        class: "chart-tooltip-value",
                        style: "color: {LINE_COLOR}",
                        "cases: {count}"
                    }
                }
            }

            div {
                class: "chart-legend",
                span {
                    class: "chart-legend-swatch",
                    style: "background-color: {LINE_COLOR}",
                }
                span { "cases" }
            }
        }
    }
}
