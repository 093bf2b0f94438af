use arcus_core::system::permissions::{Permission, Role, SECTORS};
use arcus_core::system::users::{ManagedUser, UserDraft, UserStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::toast::use_toaster;
use crate::shared::components::ui::{Checkbox, Select};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

fn label_options<I>(labels: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = &'static str>,
{
    labels
        .into_iter()
        .map(|l| (l.to_string(), l.to_string()))
        .collect()
}

/// Create/edit form for a managed account. Password fields are shown only
/// when creating.
#[component]
pub fn UserForm(
    user: Option<ManagedUser>,
    /// Id handed to a new account.
    #[prop(into)]
    next_id: Signal<u32>,
    on_saved: Callback<ManagedUser>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toaster = use_toaster();
    let delay_ms = use_context::<AppConfig>()
        .map(|c| c.forms.save_delay_ms)
        .unwrap_or_default();

    let is_new = user.is_none();
    let initial = user.as_ref().map(UserDraft::from_user).unwrap_or_default();

    // Role and permissions change together, so they live in one draft signal.
    let draft = RwSignal::new(initial.clone());
    let name = RwSignal::new(initial.name.clone());
    let email = RwSignal::new(initial.email.clone());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let existing = StoredValue::new(user);

    let on_submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let mut d = draft.get_untracked();
        d.name = name.get_untracked();
        d.email = email.get_untracked();
        d.password = password.get_untracked();
        d.confirm_password = confirm_password.get_untracked();

        if let Err(e) = d.validate(is_new) {
            let message = e.to_string();
            log::warn!("user form rejected: {}", message);
            toaster.error("Erro de validação", message.clone());
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let id = existing.with_value(|u| u.as_ref().map_or_else(|| next_id.get_untracked(), |u| u.id));
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let display_name = d.name.clone();
            let saved = existing.with_value(|u| d.into_user(id, u.as_ref(), &today_iso()));
            log::info!("User {} {}", saved.id, if is_new { "created" } else { "updated" });
            if is_new {
                toaster.success("Usuário criado!", format!("{} foi criado com sucesso.", display_name));
            } else {
                toaster.success("Usuário atualizado!", format!("{} foi atualizado com sucesso.", display_name));
            }
            set_saving.set(false);
            on_saved.run(saved);
        });
    };

    let role_options = Signal::derive(|| label_options(Role::ALL.into_iter().map(|r| r.name())));
    let sector_options = Signal::derive(|| label_options(SECTORS));
    let status_options = Signal::derive(|| label_options(UserStatus::ALL.into_iter().map(|s| s.label())));

    let (title, subtitle) = if is_new {
        ("Novo Usuário", "Cadastre um novo usuário e defina suas permissões")
    } else {
        ("Editar Usuário", "Atualize os dados e permissões do usuário")
    };

    view! {
        <ModalFrame title=title.to_string() subtitle=subtitle on_close=on_close modal_class="modal--wide">
            <div class="modal-body">
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{icon("alert-circle")}<span>{e}</span></div>
                })}

                <div class="form__grid">
                    <div class="form__group">
                        <Label>"Nome Completo"</Label>
                        <Input value=name placeholder="Nome do usuário" />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=email input_type=InputType::Email placeholder="usuario@empresa.com" />
                    </div>
                </div>

                <Show when=move || is_new>
                    <div class="form__grid">
                        <div class="form__group">
                            <Label>"Senha"</Label>
                            <Input value=password input_type=InputType::Password />
                        </div>
                        <div class="form__group">
                            <Label>"Confirmar Senha"</Label>
                            <Input value=confirm_password input_type=InputType::Password />
                        </div>
                    </div>
                </Show>

                <div class="form__grid">
                    <Select
                        label="Cargo"
                        value=Signal::derive(move || draft.with(|d| d.role.clone()))
                        on_change=Callback::new(move |role: String| {
                            log::debug!("role preset '{}'", role);
                            draft.update(|d| d.apply_role_preset(&role));
                        })
                        options=role_options
                    />
                    <Select
                        label="Setor"
                        value=Signal::derive(move || draft.with(|d| d.sector.clone()))
                        on_change=Callback::new(move |sector: String| draft.update(|d| d.sector = sector))
                        options=sector_options
                    />
                    <Select
                        label="Status"
                        value=Signal::derive(move || draft.with(|d| d.status.label().to_string()))
                        on_change=Callback::new(move |label: String| {
                            if let Some(status) = UserStatus::from_label(&label) {
                                draft.update(|d| d.status = status);
                            }
                        })
                        options=status_options
                    />
                </div>

                <div class="form__group">
                    <Label>"Permissões de Acesso"</Label>
                    <div class="permission-grid">
                        {Permission::ALL.into_iter().map(|p| view! {
                            <Checkbox
                                label=p.label()
                                hint=p.description()
                                checked=Signal::derive(move || draft.with(|d| d.permissions.contains(p)))
                                on_change=Callback::new(move |checked: bool| {
                                    draft.update(|d| d.toggle_permission(p, checked));
                                })
                            />
                        }).collect_view()}
                    </div>
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || match (saving.get(), is_new) {
                        (true, _) => "Salvando...",
                        (false, true) => "Criar Usuário",
                        (false, false) => "Atualizar Usuário",
                    }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_options_use_label_as_value() {
        let options = label_options(SECTORS);
        assert_eq!(options.len(), SECTORS.len());
        assert!(options.iter().all(|(value, label)| value == label));
    }
}
