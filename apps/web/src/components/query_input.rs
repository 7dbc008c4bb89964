use leptos::prelude::*;

/// Trimmed query text, or `None` when there is nothing to submit.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Input box for research questions
#[component]
pub fn QueryInput(
    on_submit: impl Fn(String) + Send + Sync + 'static + Clone,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "Ask about a stock, e.g. \"Analyze AAPL\"")]
    placeholder: &'static str,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    let handle_submit = move || {
        if let Some(query) = normalize_query(&input_value.get()) {
            on_submit(query);
            set_input_value.set(String::new());
        }
    };

    let handle_submit_click = handle_submit.clone();
    let handle_submit_keydown = handle_submit.clone();

    view! {
        <div class="flex items-center gap-2 bg-gray-900 border border-gray-800 rounded-lg p-3">
            <input
                type="text"
                class="flex-1 px-4 py-2.5 text-sm text-white bg-gray-800 border border-gray-700 rounded-lg placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-primary-500 disabled:opacity-50 disabled:cursor-not-allowed"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    set_input_value.set(event_target_value(&ev));
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        handle_submit_keydown();
                    }
                }
                disabled=move || disabled.get()
            />
            <button
                type="button"
                class="px-5 py-2.5 bg-primary-600 text-white text-sm font-medium rounded-lg hover:bg-primary-500 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                on:click=move |_| handle_submit_click()
                disabled=move || disabled.get()
            >
                "Research / 研究"
            </button>
        </div>
    }
}
