use arcus_core::domain::opportunities::{
    stage_breakdown, total_value, weighted_value, Opportunity, OpportunityFilter, Stage,
};
use arcus_core::domain::reports::format_percent;
use arcus_core::shared::format::{format_brl, format_date_br};
use leptos::prelude::*;
use thaw::*;

use super::form::OpportunityForm;
use crate::domain::a003_opportunities::data::{mock_opportunities, PIPELINE_CONVERSION_RATE};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::select::{filter_options, filter_value, ALL_OPTION};
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_current_user;

/// `None` while closed, `Some(None)` for a new opportunity.
type FormState = Option<Option<Opportunity>>;

#[component]
pub fn OpportunitiesList() -> impl IntoView {
    let (responsible, sector) = use_current_user()
        .get_untracked()
        .map(|u| (u.name, u.sector))
        .unwrap_or_default();

    let all = RwSignal::new(mock_opportunities(&responsible, &sector));
    let search = RwSignal::new(String::new());
    let stage_filter = RwSignal::new(ALL_OPTION.to_string());
    let form: RwSignal<FormState> = RwSignal::new(None);

    let filtered = Memo::new(move |_| {
        let filter = OpportunityFilter {
            search: search.get(),
            stage: filter_value(&stage_filter.get()).and_then(Stage::from_label),
        };
        all.with(|list| filter.apply(list))
    });
    // The funnel always shows the whole pipeline.
    let funnel = Memo::new(move |_| all.with(|list| stage_breakdown(list)));

    let stage_options = filter_options("Todas as Etapas", Stage::ALL.iter().map(|s| s.label()));

    let on_saved = Callback::new(move |saved: Opportunity| {
        all.update(|list| match list.iter_mut().find(|o| o.id == saved.id) {
            Some(existing) => *existing = saved,
            None => list.push(saved),
        });
        form.set(None);
    });
    let on_close = Callback::new(move |_| form.set(None));

    view! {
        <PageFrame page_id="a003_opportunities--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pipeline de Oportunidades"</h1>
                    <span class="page__subtitle">
                        {move || format!("{} oportunidades no pipeline", filtered.get().len())}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| form.set(Some(None))>
                        {icon("plus")}
                        " Nova Oportunidade"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total do Pipeline"
                        icon_name="trending-up"
                        value=Signal::derive(move || filtered.with(|list| format_brl(total_value(list))))
                    />
                    <StatCard
                        label="Valor Ponderado"
                        icon_name="target"
                        value=Signal::derive(move || {
                            filtered.with(|list| format_brl(weighted_value(list).round() as i64))
                        })
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="Oportunidades Ativas"
                        icon_name="user"
                        value=Signal::derive(move || filtered.get().len().to_string())
                    />
                    <StatCard
                        label="Taxa de Conversão"
                        icon_name="dollar-sign"
                        value=format_percent(PIPELINE_CONVERSION_RATE)
                        tone=StatTone::Warning
                    />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1;">
                                <Input value=search placeholder="Buscar por título da oportunidade ou cliente..." />
                            </div>
                            <Select
                                value=stage_filter
                                on_change=Callback::new(move |v: String| stage_filter.set(v))
                                options=stage_options
                            />
                        </Flex>
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">"Visão do Pipeline por Etapas"</h3>
                    <p class="card__subtitle">"Distribuição das oportunidades por etapa do processo"</p>
                    <div class="funnel">
                        {move || funnel.get().into_iter().map(|totals| view! {
                            <div class=format!("funnel__stage funnel__stage--{}", totals.stage.tone())>
                                <span class="funnel__label">{totals.stage.label()}</span>
                                <span class="funnel__count">{totals.count}</span>
                                <span class="funnel__value">{format_brl(totals.value)}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            {icon("trending-up")}
                            <p>"Nenhuma oportunidade encontrada com os filtros aplicados"</p>
                        </div>
                    }
                >
                    <div class="list-stack">
                        <For
                            each=move || filtered.get()
                            key=|o| (o.id, o.stage, o.value, o.title.clone())
                            children=move |opportunity: Opportunity| {
                                let for_edit = opportunity.clone();
                                view! {
                                    <OpportunityCard
                                        opportunity=opportunity
                                        on_edit=Callback::new(move |_| form.set(Some(Some(for_edit.clone()))))
                                    />
                                }
                            }
                        />
                    </div>
                </Show>

                {move || form.get().map(|opportunity| view! {
                    <OpportunityForm opportunity=opportunity on_saved=on_saved on_close=on_close />
                })}
            </div>
        </PageFrame>
    }
}

#[component]
fn OpportunityCard(opportunity: Opportunity, on_edit: Callback<()>) -> impl IntoView {
    let stalled = opportunity.is_stalled().then_some(opportunity.days_in_stage);

    view! {
        <div class="card opportunity-card">
            <div class="opportunity-card__header">
                <div>
                    <h3>{opportunity.title.clone()}</h3>
                    <p>{opportunity.client_name.clone()}</p>
                    <p class="text-muted">{opportunity.client_document.clone()}</p>
                </div>
                <span class=format!("badge badge--{}", opportunity.stage.tone())>{opportunity.stage.label()}</span>
            </div>

            <div class="opportunity-card__grid">
                <div>
                    <span class="details-label">"Valor da Oportunidade"</span>
                    <span class="text-success text-strong">{format_brl(opportunity.value)}</span>
                </div>
                <div>
                    <span class="details-label">"Probabilidade"</span>
                    <div class="progress">
                        <div class="progress__bar" style=format!("width: {}%", opportunity.probability)></div>
                    </div>
                    <span class="text-strong">{format!("{}%", opportunity.probability)}</span>
                </div>
                <div>
                    <span class="details-label">"Previsão de Fechamento"</span>
                    <span>{format_date_br(&opportunity.expected_date)}</span>
                </div>
                <div>
                    <span class="details-label">"Tempo na Etapa"</span>
                    <span>{format!("{} dias", opportunity.days_in_stage)}</span>
                </div>
            </div>

            <div class="opportunity-card__next">
                <span class="details-label">"Próxima Ação:"</span>
                <span>{opportunity.next_action.clone()}</span>
                <span class="badge badge--outline">
                    {icon("calendar")}
                    {format_date_br(&opportunity.next_action_date)}
                </span>
            </div>

            {stalled.map(|days| view! {
                <div class="alert alert--warning">
                    {icon("alert-triangle")}
                    <span>{format!("Oportunidade parada há {} dias nesta etapa", days)}</span>
                </div>
            })}

            <div class="opportunity-card__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_edit.run(())>
                    {icon("edit")}
                    " Editar"
                </Button>
            </div>
        </div>
    }
}
