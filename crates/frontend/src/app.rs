use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::toast::{Toaster, ToasterHost};
use crate::shared::config::AppConfig;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Delays and log level, read once at startup.
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    provide_context(Toaster::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <ToasterHost />
    }
}
