use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-gray-900 border border-gray-800 rounded-lg p-12 flex flex-col items-center justify-center text-center"
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div class="w-12 h-12 mb-6 rounded-full border-4 border-gray-700 border-t-primary-500 animate-spin"></div>
            <p class="text-sm text-gray-300 max-w-sm mb-4">{message.clone()}</p>
            <div class="flex gap-1.5" aria-hidden="true">
                <div class="w-2 h-2 rounded-full bg-primary-400 animate-bounce" style="animation-delay: 0ms"></div>
                <div class="w-2 h-2 rounded-full bg-primary-500 animate-bounce" style="animation-delay: 150ms"></div>
                <div class="w-2 h-2 rounded-full bg-primary-600 animate-bounce" style="animation-delay: 300ms"></div>
            </div>
            <span class="sr-only">{format!("Loading: {}", message)}</span>
        </div>
    }
}
