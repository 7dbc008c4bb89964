use leptos::prelude::*;

use crate::format::format_ratio;
use crate::models::{PeerComparison, VisualizationData};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationMetric {
    PriceToEarnings,
    PriceToBook,
    PriceToSales,
}

impl ValuationMetric {
    pub const ALL: [ValuationMetric; 3] = [
        ValuationMetric::PriceToEarnings,
        ValuationMetric::PriceToBook,
        ValuationMetric::PriceToSales,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ValuationMetric::PriceToEarnings => "P/E",
            ValuationMetric::PriceToBook => "P/B",
            ValuationMetric::PriceToSales => "P/S",
        }
    }

    pub fn value(&self, peer: &PeerComparison) -> Option<f64> {
        match self {
            ValuationMetric::PriceToEarnings => peer.pe_ratio,
            ValuationMetric::PriceToBook => peer.pb_ratio,
            ValuationMetric::PriceToSales => peer.ps_ratio,
        }
    }
}

/// Bar heights in 0..=1 relative to the metric's largest positive value.
/// Missing or non-positive values get no bar.
pub fn bar_fractions(peers: &[PeerComparison], metric: ValuationMetric) -> Vec<Option<f64>> {
    let max = peers
        .iter()
        .filter_map(|p| metric.value(p))
        .filter(|v| *v > 0.0)
        .fold(0.0_f64, f64::max);

    peers
        .iter()
        .map(|peer| match metric.value(peer) {
            Some(v) if v > 0.0 && max > 0.0 => Some(v / max),
            _ => None,
        })
        .collect()
}

const BAR_AREA_HEIGHT: f64 = 160.0;

#[component]
pub fn PeerComparisonChart(data: VisualizationData) -> impl IntoView {
    let peers = data.peer_comparison.clone();

    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-lg p-6" data-chart="peers">
            <h3 class="text-lg font-semibold text-white mb-1">
                {format!("{} Valuation vs Peers", data.ticker)}
            </h3>
            <p class="text-xs text-gray-500 mb-4">"Valuation Comparison / 估值比较"</p>

            <div class="grid grid-cols-3 gap-6">
                {ValuationMetric::ALL.into_iter().map(|metric| {
                    let fractions = bar_fractions(&peers, metric);
                    view! {
                        <div>
                            <p class="text-sm text-gray-400 mb-2 text-center">{metric.label()}</p>
                            <div class="flex items-end justify-center gap-2" style=format!("height: {}px", BAR_AREA_HEIGHT)>
                                {peers.iter().zip(fractions).map(|(peer, fraction)| {
                                    let color = if peer.is_main { "bg-primary-500" } else { "bg-gray-600" };
                                    let height = fraction.map(|f| f * BAR_AREA_HEIGHT).unwrap_or(0.0);
                                    view! {
                                        <div class="flex flex-col items-center justify-end h-full">
                                            <span class="text-xs font-mono text-gray-300 mb-1">
                                                {format_ratio(metric.value(peer))}
                                            </span>
                                            <div
                                                class=format!("w-8 rounded-t {}", color)
                                                style=format!("height: {:.1}px", height)
                                                title=peer.name.clone().unwrap_or_else(|| peer.ticker.clone())
                                            />
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="flex flex-wrap justify-center gap-4 mt-4 text-xs text-gray-400">
                {peers.iter().map(|peer| {
                    let swatch = if peer.is_main { "bg-primary-500" } else { "bg-gray-600" };
                    view! {
                        <span class="flex items-center gap-1.5">
                            <span class=format!("inline-block w-3 h-3 rounded-sm {}", swatch) />
                            {peer.ticker.clone()}
                        </span>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer(ticker: &str, pe: Option<f64>, is_main: bool) -> PeerComparison {
        PeerComparison {
            ticker: ticker.into(),
            name: None,
            pe_ratio: pe,
            pb_ratio: None,
            ps_ratio: None,
            is_main,
        }
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let peers = vec![peer("AAPL", Some(30.0), true), peer("Tech Avg", Some(15.0), false)];
        assert_eq!(bar_fractions(&peers, ValuationMetric::PriceToEarnings), vec![Some(1.0), Some(0.5)]);
    }

    #[test]
    fn missing_and_negative_values_draw_nothing() {
        let peers = vec![peer("AAPL", None, true), peer("LOSS", Some(-4.0), false), peer("X", Some(8.0), false)];
        assert_eq!(
            bar_fractions(&peers, ValuationMetric::PriceToEarnings),
            vec![None, None, Some(1.0)]
        );
        assert_eq!(bar_fractions(&peers, ValuationMetric::PriceToBook), vec![None, None, None]);
    }
}
