use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{ApiHandle, ResearchApi};
use crate::components::HistoryMessage;
use crate::format::short_session_id;
use crate::models::SessionHistoryResponse;

/// What the session page shows once the history request settles.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryView {
    Loaded(SessionHistoryResponse),
    NotFound,
    Failed(String),
}

pub async fn load_history(api: &dyn ResearchApi, session_id: &str) -> HistoryView {
    match api.get_session_history(session_id).await {
        Ok(history) => HistoryView::Loaded(history),
        Err(e) if e.is_not_found() => HistoryView::NotFound,
        Err(e) => {
            log::error!("failed to load session {}: {}", session_id, e);
            HistoryView::Failed(e.to_string())
        }
    }
}

#[component]
pub fn SessionPage() -> impl IntoView {
    let api = expect_context::<ApiHandle>();
    let params = use_params_map();

    let session_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let history_resource = LocalResource::new(move || {
        let id = session_id.get();
        let api = api.clone();
        async move { load_history(&*api, &id).await }
    });

    view! {
        <div class="max-w-4xl mx-auto space-y-6">
            <nav aria-label="Breadcrumb">
                <a href="/" class="inline-flex items-center gap-2 text-sm text-gray-400 hover:text-primary-400 transition-colors">
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M15 19l-7-7 7-7"/>
                    </svg>
                    "Back to Research"
                </a>
            </nav>

            <Suspense fallback=move || view! {
                <div class="space-y-4">
                    <div class="h-8 w-64 bg-gray-800 rounded animate-pulse"></div>
                    <div class="h-32 bg-gray-900 rounded-lg animate-pulse"></div>
                </div>
            }>
                {move || {
                    history_resource.get().map(|result| {
                        match &*result {
                            HistoryView::Loaded(history) => {
                                let messages = history.messages.clone();
                                view! {
                                    <header class="flex items-baseline justify-between">
                                        <h1 class="text-2xl font-semibold text-white">"Conversation / 对话"</h1>
                                        <span class="text-xs text-gray-500 font-mono">
                                            {format!(
                                                "{} · {} messages",
                                                short_session_id(&history.session_id),
                                                history.message_count
                                            )}
                                        </span>
                                    </header>
                                    <div class="space-y-4">
                                        {messages.into_iter().map(|message| view! {
                                            <HistoryMessage message=message />
                                        }).collect_view()}
                                    </div>
                                }.into_any()
                            }
                            HistoryView::NotFound => view! {
                                <div class="text-center py-20">
                                    <h1 class="text-2xl font-semibold text-white mb-3">"Session Not Found"</h1>
                                    <p class="text-gray-400">
                                        "This session does not exist or has expired."
                                    </p>
                                </div>
                            }.into_any(),
                            HistoryView::Failed(message) => view! {
                                <div class="bg-red-950/30 border border-red-800/50 rounded-lg p-6" role="alert">
                                    <h1 class="text-lg font-semibold text-red-300 mb-2">"Error Loading Session"</h1>
                                    <p class="text-sm text-red-200 font-mono break-all">{message.clone()}</p>
                                </div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
