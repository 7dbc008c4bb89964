use leptos::prelude::*;

use crate::format::format_timestamp;
use crate::models::SessionSummary;

pub fn session_href(session_id: &str) -> String {
    format!("/sessions/{}", session_id)
}

/// Sidebar list of prior research sessions, newest first as sent by the backend.
#[component]
pub fn SessionList(
    sessions: Vec<SessionSummary>,
    #[prop(default = None)] active: Option<String>,
) -> impl IntoView {
    if sessions.is_empty() {
        return view! {
            <p class="text-sm text-gray-500 px-2">"No sessions yet / 暂无会话"</p>
        }
        .into_any();
    }

    view! {
        <ul class="space-y-1">
            {sessions.into_iter().map(|session| {
                let is_active = active.as_deref() == Some(session.session_id.as_str());
                let class = if is_active {
                    "block rounded-md px-3 py-2 bg-gray-800 border border-primary-600/50"
                } else {
                    "block rounded-md px-3 py-2 hover:bg-gray-800/60 border border-transparent"
                };
                view! {
                    <li>
                        <a href=session_href(&session.session_id) class=class>
                            <p class="text-sm text-gray-200 truncate">{session.title().to_string()}</p>
                            <p class="text-xs text-gray-500 mt-0.5">
                                {format!(
                                    "{} messages · {}",
                                    session.message_count,
                                    format_timestamp(&session.updated_at)
                                )}
                            </p>
                        </a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_point_at_history_page() {
        assert_eq!(session_href("abc-123"), "/sessions/abc-123");
    }
}
