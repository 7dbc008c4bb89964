use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 bg-gray-950/95 backdrop-blur-sm border-b border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="/"
                        class="flex items-center gap-3 text-white hover:text-primary-400 transition-colors duration-200"
                        aria-label="Equity Research Home"
                    >
                        <svg class="w-7 h-7 text-primary-500" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M22 7l-8.5 8.5-5-5L2 17M16 7h6v6"/>
                        </svg>
                        <span class="font-semibold text-lg tracking-tight">
                            "Equity Research / 股票研究"
                        </span>
                    </a>

                    <nav class="flex items-center gap-4 text-sm" role="navigation" aria-label="Main navigation">
                        <a href="/" class="text-gray-400 hover:text-white transition-colors">"New Research"</a>
                    </nav>
                </div>
            </div>
        </header>
    }
}
