use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiHandle, ResearchApi};
use crate::components::{LoadingSpinner, QueryInput, ReportDisplay, SessionList};
use crate::models::{ResearchQueryRequest, ResearchState};

/// Builds the next request, continuing `current_session` when one is active.
pub fn build_request(query: String, current_session: Option<String>) -> ResearchQueryRequest {
    match current_session {
        Some(session_id) => ResearchQueryRequest::new(query).in_session(session_id),
        None => ResearchQueryRequest::new(query),
    }
}

/// Runs one research query and folds the outcome into the page state.
pub async fn run_query(api: &dyn ResearchApi, request: &ResearchQueryRequest) -> ResearchState {
    match api.submit_query(request).await {
        Ok(response) => {
            log::info!(
                "research report ready for session {} ({} tickers)",
                response.session_id,
                response.tickers.len()
            );
            ResearchState::Complete(Box::new(response))
        }
        Err(e) => {
            log::error!("research query failed: {}", e);
            ResearchState::Error(e.to_string())
        }
    }
}

#[component]
pub fn ResearchPage() -> impl IntoView {
    let api = expect_context::<ApiHandle>();

    let (state, set_state) = signal(ResearchState::Idle);
    let (session_id, set_session_id) = signal::<Option<String>>(None);
    let (sessions_version, set_sessions_version) = signal(0u32);

    let sessions_api = api.clone();
    let sessions_resource = LocalResource::new(move || {
        sessions_version.track();
        let api = sessions_api.clone();
        async move { api.get_sessions().await }
    });

    let on_submit = move |query: String| {
        let api = api.clone();
        let request = build_request(query.clone(), session_id.get_untracked());
        set_state.set(ResearchState::Loading { query });

        spawn_local(async move {
            let next = run_query(&*api, &request).await;
            if let ResearchState::Complete(response) = &next {
                set_session_id.set(Some(response.session_id.clone()));
                set_sessions_version.update(|v| *v += 1);
            }
            set_state.set(next);
        });
    };

    let start_new_session = move |_| {
        set_session_id.set(None);
        set_state.set(ResearchState::Idle);
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
            // Sessions sidebar
            <aside class="lg:col-span-1 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-sm font-semibold uppercase tracking-wider text-gray-400">
                        "Sessions / 会话"
                    </h2>
                    <button
                        type="button"
                        class="text-xs text-primary-400 hover:text-primary-300"
                        on:click=start_new_session
                    >
                        "+ New"
                    </button>
                </div>
                <Suspense fallback=move || view! {
                    <div class="space-y-2">
                        {(0..3).map(|_| view! {
                            <div class="h-12 rounded-md bg-gray-800 animate-pulse"></div>
                        }).collect_view()}
                    </div>
                }>
                    {move || {
                        sessions_resource.get().map(|result| {
                            match &*result {
                                Ok(response) => view! {
                                    <SessionList
                                        sessions=response.sessions.clone()
                                        active=session_id.get()
                                    />
                                }.into_any(),
                                Err(e) => view! {
                                    <p class="text-xs text-red-400 px-2">{format!("Could not load sessions: {}", e)}</p>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </aside>

            // Query + report
            <section class="lg:col-span-3 space-y-6">
                <QueryInput
                    on_submit=on_submit
                    disabled=Signal::derive(move || state.with(ResearchState::is_loading))
                />

                {move || match state.get() {
                    ResearchState::Idle => view! { <EmptyState /> }.into_any(),
                    ResearchState::Loading { query } => view! {
                        <LoadingSpinner message=format!("Researching \"{}\"...", query) />
                    }.into_any(),
                    ResearchState::Complete(response) => view! {
                        <ReportDisplay report=*response />
                    }.into_any(),
                    ResearchState::Error(message) => view! { <ErrorPanel message=message /> }.into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-lg p-12 text-center">
            <h1 class="text-2xl font-semibold text-white mb-3">"Investment Research Assistant"</h1>
            <p class="text-gray-400 max-w-xl mx-auto">
                "Ask a question about one or more stocks. Market data, sentiment, analyst consensus "
                "and filings are combined into a single report."
            </p>
        </div>
    }
}

#[component]
fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-950/30 border border-red-800/50 rounded-lg p-6" role="alert">
            <h2 class="text-lg font-semibold text-red-300 mb-2">"Research failed / 研究失败"</h2>
            <p class="text-sm text-red-200 font-mono break-all">{message}</p>
        </div>
    }
}
