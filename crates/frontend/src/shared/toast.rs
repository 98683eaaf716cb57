//! Non-blocking notifications.
//!
//! `ToastService` is provided once by `App` and reached through
//! [`use_toasts`]. Each toast dismisses itself after the timeout configured in
//! `[ui]`; the user can close it earlier.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::config;
use super::icons::icon;
use super::list_controller::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }

    fn timeout_ms(&self) -> u32 {
        match self {
            ToastKind::Success => config().ui.toast_success_ms,
            ToastKind::Error => config().ui.toast_error_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered stack of visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Maximum number of toasts kept on screen; older ones are dropped.
    pub const MAX_VISIBLE: usize = 5;

    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message });
        if self.toasts.len() > Self::MAX_VISIBLE {
            let overflow = self.toasts.len() - Self::MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        let timeout = kind.timeout_ms();
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn success(&self, message: String) {
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: String) {
        log::info!("error toast: {}", message);
        self.show(ToastKind::Error, message);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack. Mounted once at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.toasts()
                key=|t| t.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Close"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Saved".into());
        let b = queue.push(ToastKind::Error, "Failed".into());
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "One".into());
        let b = queue.push(ToastKind::Success, "Two".into());
        queue.dismiss(a);
        assert_eq!(queue.toasts().iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_oldest_toasts_are_dropped_past_the_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..(ToastQueue::MAX_VISIBLE + 2) {
            queue.push(ToastKind::Success, format!("toast {i}"));
        }
        assert_eq!(queue.toasts().len(), ToastQueue::MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].message, "toast 2");
    }
}
