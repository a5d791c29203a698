//! Transient success/error notifications.

use leptos::prelude::*;
use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Create the queue and put it in context.
    pub fn provide() -> Self {
        let toasts = Self::new();
        provide_context(toasts);
        toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Visible toasts, oldest first. Tracked.
    pub fn visible(&self) -> Vec<Toast> {
        self.items.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, message }));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
    }

    // No timers off the browser; toasts stay until dismissed.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the queue in a corner of the page.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.visible()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
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
    fn test_push_and_dismiss() {
        let owner = Owner::new();
        owner.with(|| {
            let toasts = Toasts::new();
            toasts.success("Beginner Chess Set added to cart!");
            toasts.error("Failed to place order. Please try again.");

            let visible = toasts.visible();
            assert_eq!(visible.len(), 2);
            assert_eq!(visible[0].kind, ToastKind::Success);
            assert_ne!(visible[0].id, visible[1].id);

            toasts.dismiss(visible[0].id);
            let visible = toasts.visible();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].message, "Failed to place order. Please try again.");
        });
    }
}
