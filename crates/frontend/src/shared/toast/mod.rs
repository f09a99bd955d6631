//! Transient notifications.
//!
//! [`ToastService`] is provided once in [`App`](crate::app::App) and rendered by
//! [`Toaster`]. Every toast dismisses itself after [`TOAST_TIMEOUT_MS`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered list of visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Unknown ids are ignored (already dismissed by click).
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
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

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        Timeout::new(TOAST_TIMEOUT_MS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
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

/// Toast service from context; without one, messages only reach the console.
pub fn use_toasts() -> Option<ToastService> {
    let service = use_context::<ToastService>();
    if service.is_none() {
        log::warn!("ToastService not provided");
    }
    service
}

#[component]
pub fn Toaster() -> impl IntoView {
    let Some(service) = use_toasts() else {
        return view! { <></> }.into_any();
    };

    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || service.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| service.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
    .into_any()
}
