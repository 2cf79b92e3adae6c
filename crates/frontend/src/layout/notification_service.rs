use leptos::prelude::*;
use std::collections::VecDeque;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn css_modifier(self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice--success",
            NoticeLevel::Warning => "notice--warning",
            NoticeLevel::Error => "notice--error",
        }
    }
}

/// Message for the cashier, shown until acknowledged.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}

/// Modal notification service.
///
/// Notices queue up and are shown one at a time; the next one appears when
/// the current one is dismissed.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<VecDeque<(Uuid, Notice)>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(VecDeque::new()),
        }
    }

    pub fn push(&self, notice: Notice) {
        self.queue.update(|q| q.push_back((Uuid::new_v4(), notice)));
    }

    pub fn push_all(&self, notices: impl IntoIterator<Item = Notice>) {
        let notices: Vec<_> = notices.into_iter().collect();
        if notices.is_empty() {
            return;
        }
        self.queue.update(|q| {
            q.extend(notices.into_iter().map(|n| (Uuid::new_v4(), n)));
        });
    }

    /// Закрыть текущее уведомление
    pub fn dismiss(&self) {
        self.queue.update(|q| {
            q.pop_front();
        });
    }

    pub fn current(&self) -> Option<(Uuid, Notice)> {
        self.queue.with(|q| q.front().cloned())
    }

    /// No notice is waiting for the cashier
    pub fn is_idle(&self) -> bool {
        self.queue.with(VecDeque::is_empty)
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the head of the notification queue as a modal.
/// Usage:
/// ```text
/// provide_context(NotificationService::new());
/// view! { <NotificationHost /> }
/// ```
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        {move || {
            match notifications.current() {
                Some((id, notice)) => view! {
                    <div class="modal-overlay" role="alertdialog" data-notice-id=id.to_string()>
                        <div
                            class=format!("modal-content notice {}", notice.level.css_modifier())
                            on:click=|e| e.stop_propagation()
                        >
                            <p class="notice__text" style="white-space: pre-line;">{notice.text}</p>
                            <div class="notice__actions">
                                <button
                                    class="button button--primary"
                                    autofocus=true
                                    on:click=move |_| notifications.dismiss()
                                >
                                    "OK"
                                </button>
                            </div>
                        </div>
                    </div>
                }.into_any(),
                None => view! { <></> }.into_any(),
            }
        }}
    }
}
