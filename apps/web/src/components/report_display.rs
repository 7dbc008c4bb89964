use leptos::prelude::*;

use crate::components::{DataIndicator, InvestorSnapshotCard, MarkdownContent, PeerComparisonChart, PriceChart};
use crate::models::ResearchQueryResponse;
use crate::report_view::{
    ChartSection, ReportContent, ReportHeader, ReportLayout, ViewMode, DISCLAIMER_EN, DISCLAIMER_ZH,
};

/// Full research report with a simple/detailed toggle. The view mode is the only
/// state held here; everything else comes from `report`.
#[component]
pub fn ReportDisplay(
    report: ResearchQueryResponse,
    #[prop(optional)] initial_mode: ViewMode,
) -> impl IntoView {
    let (view_mode, set_view_mode) = signal(initial_mode);
    let header = ReportHeader::from_response(&report);
    let report = StoredValue::new(report);
    let layout = Memo::new(move |_| report.with_value(|r| ReportLayout::build(r, view_mode.get())));

    view! {
        <div class="space-y-6">
            <QueryHeader header=header />
            <ViewModeToggle view_mode=view_mode set_view_mode=set_view_mode />

            {move || layout.with(|l| l.indicators.clone()).map(|indicators| view! {
                <div class="grid grid-cols-2 md:grid-cols-4 gap-3" data-section="indicators">
                    {indicators.into_iter().map(|indicator| view! {
                        <DataIndicator
                            icon=indicator.icon
                            label=indicator.label
                            available=indicator.available
                        />
                    }).collect_view()}
                </div>
            })}

            {move || content_view(layout.with(|l| l.content.clone()), view_mode.get())}

            <DisclaimerFooter />
        </div>
    }
}

fn content_view(content: ReportContent, view_mode: ViewMode) -> AnyView {
    match content {
        ReportContent::Snapshot { snapshot, charts } => view! {
            <InvestorSnapshotCard snapshot=snapshot />
            {charts.map(|section| view! { <ChartSectionView section=section view_mode=view_mode /> })}
        }
        .into_any(),
        ReportContent::Full { markdown, charts } => view! {
            <div class="bg-gray-900 border border-gray-800 rounded-lg p-8" data-section="report">
                <MarkdownContent source=markdown />
            </div>
            {charts.map(|section| view! { <ChartSectionView section=section view_mode=view_mode /> })}
        }
        .into_any(),
    }
}

#[component]
fn QueryHeader(header: ReportHeader) -> impl IntoView {
    let badges = header.shows_badges().then(|| {
        let tickers = header.tickers.clone();
        view! {
            <div class="flex flex-wrap gap-2" data-section="tickers">
                {tickers.into_iter().map(|ticker| view! {
                    <span class="px-3 py-1 bg-primary-600/20 border border-primary-600/50 text-primary-400 rounded-full text-sm font-mono font-semibold">
                        {ticker}
                    </span>
                }).collect_view()}
            </div>
        }
    });

    view! {
        <div class="bg-gradient-to-r from-gray-900 to-gray-800 border border-gray-700 rounded-lg p-6">
            <div class="space-y-4">
                <div>
                    <div class="flex items-center space-x-2 text-gray-400 text-sm mb-2">
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6"/>
                        </svg>
                        <span>"Research Query"</span>
                    </div>
                    <h2 class="text-xl font-semibold text-white">{header.query.clone()}</h2>
                </div>

                {badges}

                <div class="flex items-center space-x-2 text-xs text-gray-500">
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                        <rect x="3" y="4" width="18" height="18" rx="2"/>
                        <path stroke-linecap="round" d="M16 2v4M8 2v4M3 10h18"/>
                    </svg>
                    <span>{header.timestamp.clone()}</span>
                    <span class="text-gray-700">"•"</span>
                    <span class="font-mono">{header.session_id.clone()}</span>
                </div>
            </div>
        </div>
    }
}

fn toggle_button_class(selected: bool) -> &'static str {
    if selected {
        "flex items-center space-x-2 px-4 py-2 rounded-md text-sm font-medium transition-all bg-primary-600 text-white shadow-lg"
    } else {
        "flex items-center space-x-2 px-4 py-2 rounded-md text-sm font-medium transition-all text-gray-400 hover:text-gray-300"
    }
}

#[component]
fn ViewModeToggle(view_mode: ReadSignal<ViewMode>, set_view_mode: WriteSignal<ViewMode>) -> impl IntoView {
    let mode_button = move |mode: ViewMode| {
        view! {
            <button
                type="button"
                class=move || toggle_button_class(view_mode.get() == mode)
                aria-pressed=move || (view_mode.get() == mode).to_string()
                on:click=move |_| set_view_mode.set(mode)
            >
                <span>{mode.label()}</span>
            </button>
        }
    };

    view! {
        <div class="flex items-center justify-between bg-gray-900 border border-gray-800 rounded-lg p-4">
            <div class="flex items-center space-x-2">
                <svg class="w-4 h-4 text-primary-500" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2z"/>
                </svg>
                <span class="text-sm text-gray-300">"View Mode / 查看模式"</span>
            </div>
            <div class="flex items-center space-x-2 bg-gray-800 rounded-lg p-1">
                {mode_button(ViewMode::Simple)}
                {mode_button(ViewMode::Detailed)}
            </div>
        </div>
    }
}

#[component]
fn ChartSectionView(section: ChartSection, view_mode: ViewMode) -> impl IntoView {
    view! {
        <div class="space-y-6" data-section="charts">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-white flex items-center space-x-2">
                    <svg class="w-6 h-6 text-primary-500" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M12 20V10M18 20V4M6 20v-4"/>
                    </svg>
                    <span>{section.heading}</span>
                </h2>
            </div>

            {section.entries.into_iter().map(|entry| {
                let price = entry.show_price.then(|| view! {
                    <PriceChart data=entry.data.clone() view_mode=view_mode />
                });
                let peers = entry.show_peers.then(|| view! {
                    <PeerComparisonChart data=entry.data.clone() />
                });
                view! {
                    <div class="space-y-6" data-ticker=entry.data.ticker.clone()>
                        {price}
                        {peers}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn DisclaimerFooter() -> impl IntoView {
    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-lg p-4" data-section="disclaimer">
            <p class="text-xs text-gray-500 text-center">{DISCLAIMER_EN}</p>
            <p class="text-xs text-gray-500 text-center mt-2">{DISCLAIMER_ZH}</p>
        </div>
    }
}
