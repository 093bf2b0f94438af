//! Transient notifications in the corner of the screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

pub const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Shows a toast and schedules its removal.
    pub fn push(&self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> u32 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                title: title.into(),
                description: description.into(),
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            this.dismiss(id);
        });
        id
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title, description);
    }

    /// Dismissing an id that is already gone is a no-op.
    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster not found in component tree")
}

#[component]
pub fn ToasterHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toaster">
            <For
                each=move || toaster.toasts.get()
                key=|t| t.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__description">{toast.description}</div>
                            </div>
                            <button
                                class="toast__close"
                                title="Fechar"
                                on:click=move |_| toaster.dismiss(id)
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
