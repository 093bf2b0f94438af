use arcus_core::domain::clients::{check_document, Client, ClientDraft, ClientStatus, DocumentCheck, PersonKind};
use arcus_core::system::permissions::SECTORS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_clients::data::known_clients;
use crate::shared::components::toast::use_toaster;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_current_user;

/// Create/edit form for a client. `client` is `None` for a new one.
#[component]
pub fn ClientForm(
    client: Option<Client>,
    on_saved: Callback<Client>,
    on_close: Callback<()>,
) -> impl IntoView {
    let user = use_current_user().get_untracked();
    let user_name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let user_sector = user.map(|u| u.sector).unwrap_or_default();
    let toaster = use_toaster();
    let delay_ms = use_context::<AppConfig>()
        .map(|c| c.forms.save_delay_ms)
        .unwrap_or_default();

    let is_edit = client.is_some();
    let draft = match &client {
        Some(c) => ClientDraft::from_client(c),
        None => ClientDraft::new(&user_sector),
    };

    let kind = RwSignal::new(draft.kind);
    let document = RwSignal::new(draft.document.clone());
    let name = RwSignal::new(draft.name.clone());
    let email = RwSignal::new(draft.email.clone());
    let phone = RwSignal::new(draft.phone.clone());
    let address = RwSignal::new(draft.address.clone());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let zip_code = RwSignal::new(String::new());
    let sector = RwSignal::new(draft.sector.clone());
    let status = RwSignal::new(draft.status);
    let notes = RwSignal::new(String::new());

    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let known = StoredValue::new(known_clients());
    let document_check = Memo::new(move |_| known.with_value(|k| check_document(&document.get(), k)));

    let on_document_input = move |ev: leptos::ev::Event| {
        let mut d = ClientDraft { kind: kind.get_untracked(), ..ClientDraft::default() };
        d.set_document(&event_target_value(&ev));
        document.set(d.document);
    };

    let collect = move || ClientDraft {
        name: name.get_untracked(),
        document: document.get_untracked(),
        kind: kind.get_untracked(),
        email: email.get_untracked(),
        phone: phone.get_untracked(),
        address: address.get_untracked(),
        city: city.get_untracked(),
        state: state.get_untracked(),
        zip_code: zip_code.get_untracked(),
        sector: sector.get_untracked(),
        status: status.get_untracked(),
        notes: notes.get_untracked(),
    };

    let existing = StoredValue::new(client);
    let created_by = StoredValue::new(user_name);

    let on_submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let draft = collect();
        if let Err(e) = draft.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let name = draft.name.clone();
            let saved = existing.with_value(|existing| {
                let id = existing.as_ref().map_or_else(new_client_id, |c| c.id);
                created_by.with_value(|by| draft.into_client(id, existing.as_ref(), by, &today_iso()))
            });
            if is_edit {
                log::info!("Client {} updated", saved.id);
                toaster.success("Cliente atualizado!", format!("{} foi atualizado com sucesso.", name));
            } else {
                log::info!("Client {} created", saved.id);
                toaster.success("Cliente cadastrado!", format!("{} foi cadastrado com sucesso.", name));
            }
            set_saving.set(false);
            on_saved.run(saved);
        });
    };

    let kind_options = Signal::derive(|| {
        [PersonKind::PJ, PersonKind::PF]
            .into_iter()
            .map(|k| (k.code().to_string(), k.label().to_string()))
            .collect::<Vec<_>>()
    });
    let status_options = Signal::derive(|| {
        ClientStatus::ALL
            .into_iter()
            .map(|s| (s.label().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });
    let sector_options = Signal::derive(|| {
        SECTORS
            .into_iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect::<Vec<_>>()
    });

    let title = if is_edit { "Editar Cliente" } else { "Novo Cliente" };

    view! {
        <ModalFrame title=title.to_string() on_close=on_close modal_class="modal--wide">
            <div class="modal-body">
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{icon("alert-circle")}<span>{e}</span></div>
                })}

                <h3 class="form__section-title">"Dados Básicos"</h3>
                <div class="form__grid">
                    <Select
                        label="Tipo de Pessoa"
                        value=Signal::derive(move || kind.get().code().to_string())
                        on_change=Callback::new(move |code: String| {
                            if let Some(k) = PersonKind::from_code(&code) {
                                kind.set(k);
                                document.set(String::new());
                            }
                        })
                        options=kind_options
                    />
                    <div class="form__group">
                        <Label>{move || format!("{} *", kind.get().document_label())}</Label>
                        <input
                            class="form__input"
                            placeholder=move || kind.get().placeholder()
                            prop:value=move || document.get()
                            on:input=on_document_input
                        />
                        {move || document_check.get().map(|check| {
                            let class = match check {
                                DocumentCheck::Existing { .. } => "form__hint form__hint--info",
                                DocumentCheck::New => "form__hint form__hint--success",
                            };
                            view! { <span class=class>{check.message()}</span> }
                        })}
                    </div>
                    <div class="form__group">
                        <Label>"Nome / Razão Social *"</Label>
                        <Input value=name placeholder="Nome completo ou razão social" />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=email input_type=InputType::Email placeholder="contato@empresa.com.br" />
                    </div>
                    <div class="form__group">
                        <Label>"Telefone"</Label>
                        <Input value=phone placeholder="(11) 99999-9999" />
                    </div>
                    <Select
                        label="Setor (Identificação Automática)"
                        value=sector
                        on_change=Callback::new(move |s: String| sector.set(s))
                        options=sector_options
                    />
                    <Select
                        label="Status"
                        value=Signal::derive(move || status.get().label().to_string())
                        on_change=Callback::new(move |label: String| {
                            if let Some(s) = ClientStatus::from_label(&label) {
                                status.set(s);
                            }
                        })
                        options=status_options
                    />
                </div>

                <h3 class="form__section-title">"Endereço"</h3>
                <div class="form__grid">
                    <div class="form__group">
                        <Label>"Logradouro"</Label>
                        <Input value=address placeholder="Rua, número, complemento" />
                    </div>
                    <div class="form__group">
                        <Label>"Cidade"</Label>
                        <Input value=city />
                    </div>
                    <div class="form__group">
                        <Label>"Estado"</Label>
                        <Input value=state placeholder="SP" />
                    </div>
                    <div class="form__group">
                        <Label>"CEP"</Label>
                        <Input value=zip_code placeholder="00000-000" />
                    </div>
                </div>

                <h3 class="form__section-title">"Observações Comerciais"</h3>
                <Textarea value=notes placeholder="Informações relevantes sobre o cliente" rows=4 />
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
                    {move || match (saving.get(), is_edit) {
                        (true, _) => "Salvando...",
                        (false, true) => "Atualizar Cliente",
                        (false, false) => "Cadastrar Cliente",
                    }}
                </Button>
            </div>
        </ModalFrame>
    }
}

/// Id for a new client: milliseconds since the epoch, truncated.
fn new_client_id() -> u32 {
    (chrono::Utc::now().timestamp_millis() % i64::from(u32::MAX)) as u32
}
