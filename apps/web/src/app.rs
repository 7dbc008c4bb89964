use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiHandle;
use crate::components::Header;
use crate::config::ApiConfig;
use crate::pages::{ResearchPage, SessionPage};

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiHandle::http(ApiConfig::from_env()));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-950 text-gray-100">
                <Header />
                <main class="container mx-auto px-4 py-8">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=ResearchPage />
                        <Route path=path!("/sessions/:id") view=SessionPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <h1 class="text-6xl font-bold text-white/20 mb-4">"404"</h1>
            <h2 class="text-2xl font-semibold text-white mb-4">"Page Not Found"</h2>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <a
                href="/"
                class="inline-flex items-center gap-2 px-6 py-3 bg-primary-600 hover:bg-primary-500 rounded-lg font-semibold transition-colors"
            >
                "Back to Research"
            </a>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-800 mt-20">
            <div class="container mx-auto px-4 py-8 text-center">
                <p class="text-gray-500 text-sm">
                    "Built with Leptos + Rust."
                </p>
                <p class="text-gray-600 text-xs mt-2">
                    "For informational purposes only. Not investment advice."
                </p>
            </div>
        </footer>
    }
}
