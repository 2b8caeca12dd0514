//! Toast notifications.
//!
//! Advisory feedback only ("Added to cart", "Cart cleared"); nothing here
//! blocks interaction.

use std::time::Duration;

use leptos::prelude::*;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// A single on-screen notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the toast queue, shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

const TOAST_DURATION: Duration = Duration::from_secs(3);

impl Toasts {
    /// Create the queue and register it in context.
    pub fn provide() -> Self {
        let toasts = Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        };
        provide_context(toasts);
        toasts
    }

    /// Fetch the queue from context.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, message }));

        let items = self.items;
        set_timeout(
            move || items.update(|items| items.retain(|t| t.id != id)),
            TOAST_DURATION,
        );
    }
}

/// Renders the active toasts. Mounted once at the application root.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = Toasts::expect();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For each=move || toasts.items.get() key=|toast| toast.id let:toast>
                <div class=toast.kind.class()>{toast.message.clone()}</div>
            </For>
        </div>
    }
}
