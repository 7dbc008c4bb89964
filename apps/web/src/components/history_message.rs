use leptos::prelude::*;

use crate::components::MarkdownContent;
use crate::format::format_timestamp;
use crate::models::{Message, MessageRole};

/// One turn of a stored conversation. Assistant turns carry markdown reports.
#[component]
pub fn HistoryMessage(message: Message) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let timestamp = format_timestamp(&message.timestamp);

    view! {
        <div class=format!("flex {}", if is_user { "justify-end" } else { "justify-start" })>
            <div class=format!(
                "max-w-[85%] rounded-2xl px-4 py-3 {}",
                if is_user {
                    "bg-primary-600 text-white rounded-br-sm"
                } else {
                    "bg-gray-900 text-gray-200 rounded-bl-sm border border-gray-800"
                }
            )>
                <p class="text-xs opacity-70 mb-1">
                    {format!("{} · {}", message.role.label(), timestamp)}
                </p>
                {if is_user {
                    view! { <p class="text-sm">{message.content.clone()}</p> }.into_any()
                } else {
                    view! { <MarkdownContent source=message.content.clone() /> }.into_any()
                }}
            </div>
        </div>
    }
}
