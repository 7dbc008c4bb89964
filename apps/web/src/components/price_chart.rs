use leptos::prelude::*;

use crate::format::{format_change_pct, format_price, format_volume};
use crate::models::{PricePoint, VisualizationData};
use crate::report_view::ViewMode;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 240.0;
const CHART_PADDING: f64 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            padding: CHART_PADDING,
        }
    }
}

impl PlotArea {
    fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    pub fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.padding + self.inner_width() / 2.0;
        }
        self.padding + index as f64 / (count - 1) as f64 * self.inner_width()
    }

    /// Larger values sit higher, so y shrinks as value grows.
    pub fn y(&self, value: f64, (min, max): (f64, f64)) -> f64 {
        let span = max - min;
        if span.abs() < f64::EPSILON {
            return self.padding + self.inner_height() / 2.0;
        }
        self.padding + (max - value) / span * self.inner_height()
    }
}

/// Lowest and highest close, widened by any extra reference values.
pub fn value_range(points: &[PricePoint], extra: &[f64]) -> Option<(f64, f64)> {
    let mut values = points.iter().map(|p| p.close).chain(extra.iter().copied());
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

pub fn line_coordinates(points: &[PricePoint], range: (f64, f64), area: PlotArea) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| (area.x(i, points.len()), area.y(point.close, range)))
        .collect()
}

pub fn polyline(coords: &[(f64, f64)]) -> String {
    coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closing-price line chart. Detailed mode adds 52-week reference lines and period stats.
#[component]
pub fn PriceChart(data: VisualizationData, view_mode: ViewMode) -> impl IntoView {
    let area = PlotArea::default();
    let detailed = view_mode == ViewMode::Detailed;

    let references: Vec<(&'static str, f64)> = if detailed {
        [("52W High", data.week_52_high), ("52W Low", data.week_52_low)]
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| (label, v)))
            .collect()
    } else {
        Vec::new()
    };
    let extra: Vec<f64> = references.iter().map(|(_, v)| *v).collect();
    let range = value_range(&data.price_history, &extra).unwrap_or((0.0, 0.0));
    let coords = line_coordinates(&data.price_history, range, area);

    let latest_close = data.price_history.last().map(|p| p.close);
    let change = data.period_change_pct();
    let change_class = match change {
        Some(c) if c < 0.0 => "text-red-400",
        _ => "text-success-400",
    };
    let first_date = data.price_history.first().map(|p| p.date.clone()).unwrap_or_default();
    let last_date = data.price_history.last().map(|p| p.date.clone()).unwrap_or_default();

    let stats = detailed.then(|| {
        let stat = |label: &'static str, value: Option<String>| {
            view! {
                <div>
                    <p class="text-xs text-gray-500">{label}</p>
                    <p class="text-sm font-mono text-gray-200">{value.unwrap_or_else(|| "N/A".to_string())}</p>
                </div>
            }
        };
        view! {
            <div class="grid grid-cols-3 gap-4 mt-4 pt-4 border-t border-gray-800">
                {stat("Period High", data.period_high.map(format_price))}
                {stat("Period Low", data.period_low.map(format_price))}
                {stat("Avg Volume", data.average_volume.map(format_volume))}
            </div>
        }
    });

    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-lg p-6" data-chart="price">
            <div class="flex items-baseline justify-between mb-4">
                <h3 class="text-lg font-semibold text-white font-mono">{data.ticker.clone()}</h3>
                <div class="flex items-baseline space-x-3">
                    {latest_close.map(|close| view! {
                        <span class="text-lg font-mono text-white">{format_price(close)}</span>
                    })}
                    {change.map(|c| view! {
                        <span class=format!("text-sm font-mono {}", change_class)>{format_change_pct(c)}</span>
                    })}
                </div>
            </div>

            <svg
                width="100%"
                viewBox=format!("0 0 {} {}", area.width, area.height)
                preserveAspectRatio="none"
                class="price-chart"
            >
                {references.into_iter().map(|(label, value)| {
                    let y = area.y(value, range);
                    view! {
                        <line
                            x1=area.padding
                            x2=area.width - area.padding
                            y1=y
                            y2=y
                            stroke="rgba(255,255,255,0.2)"
                            stroke-width="1"
                            stroke-dasharray="4 4"
                        />
                        <text x=area.width - area.padding y=y - 4.0 text-anchor="end" font-size="10" fill="rgba(255,255,255,0.5)">
                            {format!("{} {}", label, format_price(value))}
                        </text>
                    }
                }).collect_view()}

                {if coords.len() > 1 {
                    view! {
                        <polyline
                            points=polyline(&coords)
                            fill="none"
                            stroke="#3b82f6"
                            stroke-width="2"
                            stroke-linejoin="round"
                        />
                    }.into_any()
                } else {
                    coords.first().map(|&(x, y)| view! {
                        <circle cx=x cy=y r="3" fill="#3b82f6" />
                    }).into_any()
                }}
            </svg>

            <div class="flex justify-between text-xs text-gray-500 mt-2">
                <span>{first_date}</span>
                <span>{last_date}</span>
            </div>

            {stats}
        </div>
    }
}
