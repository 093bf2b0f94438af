use arcus_core::domain::clients::DocumentCheck;
use arcus_core::domain::opportunities::{Opportunity, OpportunityDraft, Stage, PROBABILITY_CHOICES};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_clients::data::known_clients;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::toast::use_toaster;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_current_user;

/// Create/edit form for a pipeline opportunity.
#[component]
pub fn OpportunityForm(
    opportunity: Option<Opportunity>,
    on_saved: Callback<Opportunity>,
    on_close: Callback<()>,
) -> impl IntoView {
    let user = use_current_user().get_untracked();
    let toaster = use_toaster();
    let delay_ms = use_context::<AppConfig>()
        .map(|c| c.forms.save_delay_ms)
        .unwrap_or_default();

    let is_edit = opportunity.is_some();
    let initial = match &opportunity {
        Some(o) => OpportunityDraft::from_opportunity(o),
        None => {
            let (name, sector) = user.map(|u| (u.name, u.sector)).unwrap_or_default();
            OpportunityDraft::new(&name, &sector)
        }
    };

    // Document, client name and value move together through the draft.
    let draft = RwSignal::new(initial.clone());
    let document_check: RwSignal<Option<DocumentCheck>> = RwSignal::new(None);

    let title = RwSignal::new(initial.title.clone());
    let client_name = RwSignal::new(initial.client_name.clone());
    let expected_date = RwSignal::new(initial.expected_date.clone());
    let description = RwSignal::new(initial.description.clone());
    let requirements = RwSignal::new(initial.requirements.clone());
    let competitors = RwSignal::new(initial.competitors.clone());
    let next_action = RwSignal::new(initial.next_action.clone());
    let next_action_date = RwSignal::new(initial.next_action_date.clone());

    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let known = StoredValue::new(known_clients());
    let on_document_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let mut check = None;
        draft.update(|d| {
            d.client_name = client_name.get_untracked();
            check = known.with_value(|k| d.set_client_document(&raw, k));
        });
        if let Some(DocumentCheck::Existing { client_name: name }) = &check {
            client_name.set(name.clone());
        }
        document_check.set(check);
    };

    let on_value_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        draft.update(|d| d.set_value_input(&raw));
    };

    let existing = StoredValue::new(opportunity);

    let on_submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let mut d = draft.get_untracked();
        d.title = title.get_untracked();
        d.client_name = client_name.get_untracked();
        d.expected_date = expected_date.get_untracked();
        d.description = description.get_untracked();
        d.requirements = requirements.get_untracked();
        d.competitors = competitors.get_untracked();
        d.next_action = next_action.get_untracked();
        d.next_action_date = next_action_date.get_untracked();

        if let Err(e) = d.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let title = d.title.clone();
            let saved = existing.with_value(|existing| {
                let id = existing.as_ref().map_or_else(new_opportunity_id, |o| o.id);
                d.into_opportunity(id, existing.as_ref(), &today_iso())
            });
            let verb = if is_edit { "atualizada" } else { "criada" };
            log::info!("Opportunity {} {}", saved.id, if is_edit { "updated" } else { "created" });
            toaster.success(
                if is_edit { "Oportunidade atualizada!" } else { "Oportunidade criada!" },
                format!("{} foi {} com sucesso.", title, verb),
            );
            set_saving.set(false);
            on_saved.run(saved);
        });
    };

    let stage_options = Signal::derive(|| {
        Stage::ALL
            .into_iter()
            .map(|s| (s.label().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });
    let probability_options = Signal::derive(|| {
        PROBABILITY_CHOICES
            .into_iter()
            .map(|(p, label)| (p.to_string(), format!("{}% - {}", p, label)))
            .collect::<Vec<_>>()
    });

    let (modal_title, subtitle) = if is_edit {
        ("Editar Oportunidade", "Atualize as informações da oportunidade")
    } else {
        ("Nova Oportunidade", "Registre uma nova oportunidade no pipeline")
    };

    view! {
        <ModalFrame title=modal_title.to_string() subtitle=subtitle on_close=on_close modal_class="modal--wide">
            <div class="modal-body">
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{icon("alert-circle")}<span>{e}</span></div>
                })}

                <div class="form__grid">
                    <div class="form__group">
                        <Label>"Setor (Identificação Automática)"</Label>
                        <input class="form__input" disabled=true prop:value=move || draft.with(|d| d.sector.clone()) />
                    </div>
                    <div class="form__group">
                        <Label>"Responsável"</Label>
                        <input class="form__input" disabled=true prop:value=move || draft.with(|d| d.responsible.clone()) />
                    </div>
                </div>

                <div class="form__grid">
                    <div class="form__group">
                        <Label>"CPF/CNPJ do Cliente"</Label>
                        <input
                            class="form__input"
                            placeholder="000.000.000-00 ou 00.000.000/0000-00"
                            prop:value=move || draft.with(|d| d.client_document.clone())
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
                        <Label>"Nome do Cliente"</Label>
                        <Input value=client_name placeholder="Nome ou razão social" />
                    </div>
                </div>

                <div class="form__group">
                    <Label>"Título da Oportunidade"</Label>
                    <Input value=title placeholder="Ex: Expansão de Serviços - Nome do Cliente" />
                </div>

                <div class="form__grid">
                    <div class="form__group">
                        <Label>"Valor da Oportunidade (R$)"</Label>
                        <input
                            class="form__input"
                            placeholder="0,00"
                            prop:value=move || draft.with(|d| d.value_input.clone())
                            on:input=on_value_input
                        />
                    </div>
                    <Select
                        label="Probabilidade de Fechamento (%)"
                        value=Signal::derive(move || draft.with(|d| d.probability.to_string()))
                        on_change=Callback::new(move |v: String| {
                            if let Ok(p) = v.parse::<u8>() {
                                draft.update(|d| d.probability = p);
                            }
                        })
                        options=probability_options
                    />
                    <Select
                        label="Etapa do Pipeline"
                        value=Signal::derive(move || draft.with(|d| d.stage.label().to_string()))
                        on_change=Callback::new(move |label: String| {
                            if let Some(stage) = Stage::from_label(&label) {
                                draft.update(|d| d.stage = stage);
                            }
                        })
                        options=stage_options
                    />
                    <DateInput label="Data Prevista de Fechamento" value=expected_date />
                </div>

                <Textarea
                    label="Descrição da Oportunidade"
                    value=description
                    placeholder="Descreva brevemente a oportunidade e o contexto"
                />
                <Textarea
                    label="Requisitos e Necessidades do Cliente"
                    value=requirements
                    placeholder="Liste os principais requisitos e necessidades identificadas"
                />
                <div class="form__group">
                    <Label>"Concorrência Identificada"</Label>
                    <Input value=competitors placeholder="Ex: Concorrente A, Concorrente B, Nenhum" />
                </div>

                <div class="form__grid">
                    <div class="form__group">
                        <Label>"Próxima Ação"</Label>
                        <Input value=next_action placeholder="Ex: Agendar reunião, Enviar proposta, Aguardar retorno" />
                    </div>
                    <DateInput label="Data da Próxima Ação" value=next_action_date />
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
                    {move || match (saving.get(), is_edit) {
                        (true, _) => "Salvando...",
                        (false, true) => "Atualizar Oportunidade",
                        (false, false) => "Criar Oportunidade",
                    }}
                </Button>
            </div>
        </ModalFrame>
    }
}

fn new_opportunity_id() -> u32 {
    (chrono::Utc::now().timestamp_millis() % i64::from(u32::MAX)) as u32
}
