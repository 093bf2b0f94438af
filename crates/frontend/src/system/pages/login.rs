use arcus_core::system::auth::credentials::DEMO_ACCOUNT_HINTS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::toast::use_toaster;
use crate::shared::config::AppConfig;
use crate::system::auth::api::login_delay_ms;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_login, use_auth, use_credentials};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let toaster = use_toaster();
    let credentials = use_credentials();
    let delay_ms = login_delay_ms(use_context::<AppConfig>().as_ref());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        let credentials = credentials.clone();
        spawn_local(async move {
            match do_login(set_auth_state, credentials, email_val, password_val, delay_ms).await {
                Ok(user) => {
                    // Switching the auth state swaps this page for the main layout.
                    toaster.success("Login realizado com sucesso!", format!("Bem-vindo, {}", user.name));
                }
                Err(e) => {
                    toaster.error("Erro no login", e.to_string());
                    set_error_message.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Arcus"</h1>
                <p class="login-subtitle">"Sistema integrado de gestão comercial"</p>
                <h2>"Fazer Login"</h2>

                {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            placeholder="seu@email.com"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Senha"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            placeholder="••••••••"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="login-info">
                    <p class="login-info__title">
                        {icon("alert-circle")}
                        " Contas de demonstração:"
                    </p>
                    {DEMO_ACCOUNT_HINTS
                        .iter()
                        .map(|hint| view! {
                            <p>
                                <strong>{format!("{}:", hint.label)}</strong>
                                {format!(" {} / {}", hint.email, hint.password)}
                            </p>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
