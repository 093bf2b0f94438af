use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Modal dialog: overlay, titled header with a close button, and the body.
///
/// The body renders its own `modal-footer` when it needs actions.
#[component]
pub fn ModalFrame(
    #[prop(into)]
    title: Signal<String>,
    /// Optional line under the title.
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Called when the modal should close (overlay click or close button).
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Only close if both press and release happened on the overlay itself,
    // so selecting text inside the dialog never dismisses it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer close to next tick: the overlay must not be removed during
            // its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let class = match modal_class {
        Some(extra) => format!("modal {extra}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=class role="dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{move || title.get()}</h2>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    </div>
                    <button class="modal-close" title="Fechar" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
