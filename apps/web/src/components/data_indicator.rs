use leptos::prelude::*;

use crate::report_view::IndicatorIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorStyle {
    pub container: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub fn indicator_style(available: bool) -> IndicatorStyle {
    if available {
        IndicatorStyle {
            container: "bg-success-950/20 border-success-800/50",
            icon: "text-success-500",
            label: "text-success-400",
        }
    } else {
        IndicatorStyle {
            container: "bg-gray-900 border-gray-800",
            icon: "text-gray-600",
            label: "text-gray-500",
        }
    }
}

/// One data-availability row: icon, label, and a check or cross.
#[component]
pub fn DataIndicator(icon: IndicatorIcon, #[prop(into)] label: String, available: bool) -> impl IntoView {
    let style = indicator_style(available);

    view! {
        <div
            class=format!("flex items-center space-x-3 p-3 rounded-lg border {}", style.container)
            data-available=available.to_string()
        >
            <span class=format!("w-5 h-5 flex-shrink-0 {}", style.icon)>
                <IndicatorGlyph icon=icon />
            </span>
            <div class="flex-1 min-w-0">
                <p class=format!("text-sm font-medium truncate {}", style.label)>{label}</p>
            </div>
            {if available {
                view! {
                    <svg class="w-4 h-4 text-success-500 flex-shrink-0" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-label="available">
                        <circle cx="12" cy="12" r="10"/>
                        <path stroke-linecap="round" stroke-linejoin="round" d="M9 12l2 2 4-4"/>
                    </svg>
                }.into_any()
            } else {
                view! {
                    <svg class="w-4 h-4 text-gray-600 flex-shrink-0" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-label="unavailable">
                        <circle cx="12" cy="12" r="10"/>
                        <path stroke-linecap="round" stroke-linejoin="round" d="M15 9l-6 6M9 9l6 6"/>
                    </svg>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn IndicatorGlyph(icon: IndicatorIcon) -> impl IntoView {
    match icon {
        IndicatorIcon::MarketData => view! {
            <svg class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" d="M22 7l-8.5 8.5-5-5L2 17M16 7h6v6"/>
            </svg>
        }.into_any(),
        IndicatorIcon::Sentiment => view! {
            <svg class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" d="M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6M16 13H8M16 17H8M10 9H8"/>
            </svg>
        }.into_any(),
        IndicatorIcon::AnalystConsensus => view! {
            <svg class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" d="M12 20V10M18 20V4M6 20v-4"/>
            </svg>
        }.into_any(),
        IndicatorIcon::Context => view! {
            <svg class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                <ellipse cx="12" cy="5" rx="9" ry="3"/>
                <path d="M21 12c0 1.66-4 3-9 3s-9-1.34-9-3M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"/>
            </svg>
        }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_picks_affirmative_or_muted_styling() {
        assert!(indicator_style(true).container.contains("success"));
        assert!(indicator_style(false).container.contains("gray"));
        assert_ne!(indicator_style(true), indicator_style(false));
    }

    #[cfg(feature = "ssr")]
    fn render(available: bool) -> String {
        view! { <DataIndicator icon=IndicatorIcon::MarketData label="Market Data" available=available /> }
            .to_html()
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn available_row_carries_check_glyph() {
        let html = render(true);
        assert!(html.contains(r#"data-available="true""#));
        assert!(html.contains(r#"aria-label="available""#));
        assert!(!html.contains(r#"aria-label="unavailable""#));
        assert!(html.contains("Market Data"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn unavailable_row_carries_cross_glyph() {
        let html = render(false);
        assert!(html.contains(r#"data-available="false""#));
        assert!(html.contains(r#"aria-label="unavailable""#));
        assert!(!html.contains(r#"aria-label="available""#));
    }
}
