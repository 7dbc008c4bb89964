use leptos::prelude::*;

use crate::format::{format_change_pct, format_market_cap, format_price, format_ratio};
use crate::models::InvestorSnapshot;

#[component]
pub fn InvestorSnapshotCard(snapshot: InvestorSnapshot) -> impl IntoView {
    let rating = snapshot.investment_rating;
    let change_class = match snapshot.price_change_pct {
        Some(c) if c < 0.0 => "text-red-400",
        Some(_) => "text-success-400",
        None => "text-gray-400",
    };

    let metrics = vec![
        ("Price / 价格", snapshot.current_price.map(format_price), "text-white"),
        ("Change / 涨跌", snapshot.price_change_pct.map(format_change_pct), change_class),
        ("Market Cap / 市值", snapshot.market_cap.map(format_market_cap), "text-white"),
        ("P/E / 市盈率", Some(format_ratio(snapshot.pe_ratio)), "text-white"),
    ];

    let highlights = snapshot.key_highlights.clone();
    let risks = snapshot.risk_warnings.clone();

    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-lg p-6 space-y-6" data-section="snapshot">
            // Ticker + rating
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-400">"Investor Snapshot / 投资快照"</p>
                    <h2 class="text-2xl font-bold text-white font-mono">{snapshot.ticker.clone()}</h2>
                </div>
                <span class=format!("px-4 py-2 rounded-full text-sm font-semibold {}", rating.badge_class())>
                    {rating.label()}
                </span>
            </div>

            {(!snapshot.rating_explanation.is_empty()).then(|| view! {
                <p class="text-gray-300 leading-relaxed">{snapshot.rating_explanation.clone()}</p>
            })}

            // Metric tiles
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                {metrics.into_iter().map(|(label, value, class)| view! {
                    <div class="bg-gray-800/50 rounded-lg p-3">
                        <p class="text-xs text-gray-500 mb-1">{label}</p>
                        <p class=format!("text-lg font-mono font-semibold {}", class)>
                            {value.unwrap_or_else(|| "N/A".to_string())}
                        </p>
                    </div>
                }).collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                {(!highlights.is_empty()).then(|| view! {
                    <div>
                        <h3 class="text-sm font-semibold text-success-400 mb-2">"Key Highlights / 关键亮点"</h3>
                        <ul class="space-y-2">
                            {highlights.into_iter().map(|item| view! {
                                <li class="flex gap-2 text-sm text-gray-300">
                                    <span class="text-success-500">"+"</span>
                                    <span>{item}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                })}
                {(!risks.is_empty()).then(|| view! {
                    <div>
                        <h3 class="text-sm font-semibold text-amber-400 mb-2">"Risk Warnings / 风险提示"</h3>
                        <ul class="space-y-2">
                            {risks.into_iter().map(|item| view! {
                                <li class="flex gap-2 text-sm text-gray-300">
                                    <span class="text-amber-500">"!"</span>
                                    <span>{item}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                })}
            </div>
        </div>
    }
}
