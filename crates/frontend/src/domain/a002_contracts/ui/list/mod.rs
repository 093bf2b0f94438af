use arcus_core::domain::contracts::{Contract, ContractFilter, ContractStatus, ContractSummary, PaymentStatus};
use arcus_core::shared::format::{format_brl, format_date_br};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_contracts::data::mock_contracts;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::select::{filter_options, filter_value, ALL_OPTION};
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn status_icon(status: ContractStatus) -> AnyView {
    match status {
        ContractStatus::Ativo => view! { <span class="text-success">{icon("check-circle")}</span> }.into_any(),
        ContractStatus::Finalizado => view! { <span class="text-muted">{icon("clock")}</span> }.into_any(),
        ContractStatus::Suspenso => view! { <span class="text-warning">{icon("alert-triangle")}</span> }.into_any(),
    }
}

fn payment_badge_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::EmDia => "badge badge--success",
        PaymentStatus::Atrasado => "badge badge--error",
        PaymentStatus::Pago => "badge badge--info",
    }
}

#[component]
pub fn ContractsList() -> impl IntoView {
    let contracts = StoredValue::new(mock_contracts());
    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(ALL_OPTION.to_string());
    let payment_filter = RwSignal::new(ALL_OPTION.to_string());

    let filter = Memo::new(move |_| ContractFilter {
        search: search.get(),
        status: filter_value(&status_filter.get()).and_then(ContractStatus::from_label),
        payment: filter_value(&payment_filter.get()).and_then(PaymentStatus::from_label),
    });
    let filtered = Memo::new(move |_| contracts.with_value(|all| filter.with(|f| f.apply(all))));
    let summary = Memo::new(move |_| filtered.with(|list| ContractSummary::from(list.as_slice())));

    let status_options = filter_options("Todos os Status", ContractStatus::ALL.iter().map(|s| s.label()));
    let payment_options = filter_options("Todos os Pagamentos", PaymentStatus::ALL.iter().map(|p| p.label()));

    view! {
        <PageFrame page_id="a002_contracts--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestão de Contratos"</h1>
                    <span class="page__subtitle">
                        {move || format!("{} contratos encontrados", summary.get().count)}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total de Contratos"
                        icon_name="file-text"
                        value=Signal::derive(move || summary.get().count.to_string())
                    />
                    <StatCard
                        label="Contratos Ativos"
                        icon_name="check-circle"
                        value=Signal::derive(move || summary.get().active.to_string())
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="Valor Total"
                        icon_name="dollar-sign"
                        value=Signal::derive(move || format_brl(summary.get().total_value))
                        tone=StatTone::Warning
                    />
                    <StatCard
                        label="Em Atraso"
                        icon_name="alert-triangle"
                        value=Signal::derive(move || summary.get().overdue.to_string())
                        tone=StatTone::Error
                    />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1;">
                                <Input
                                    value=search
                                    placeholder="Buscar por cliente, número do contrato ou serviço..."
                                />
                            </div>
                            <Select
                                value=status_filter
                                on_change=Callback::new(move |v: String| status_filter.set(v))
                                options=status_options
                            />
                            <Select
                                value=payment_filter
                                on_change=Callback::new(move |v: String| payment_filter.set(v))
                                options=payment_options
                            />
                        </Flex>
                    </div>
                </div>

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            {icon("file-text")}
                            <p>"Nenhum contrato encontrado com os filtros aplicados"</p>
                        </div>
                    }
                >
                    <div class="list-stack">
                        <For
                            each=move || filtered.get()
                            key=|c| c.id
                            children=|contract: Contract| view! { <ContractCard contract=contract /> }
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn ContractCard(contract: Contract) -> impl IntoView {
    let overdue_since = (contract.payment_status == PaymentStatus::Atrasado)
        .then(|| contract.next_payment.clone())
        .flatten();
    let status_class = if contract.status == ContractStatus::Ativo {
        "badge badge--primary"
    } else {
        "badge badge--neutral"
    };

    view! {
        <div class="card contract-card">
            <div class="contract-card__header">
                {status_icon(contract.status)}
                <div>
                    <h3>{contract.number.clone()}</h3>
                    <p>{contract.client_name.clone()}</p>
                    <p class="text-muted">{contract.client_document.clone()}</p>
                </div>
            </div>

            <div class="contract-card__grid">
                <div>
                    <span class="details-label">"Serviço"</span>
                    <span>{contract.service.clone()}</span>
                </div>
                <div>
                    <span class="details-label">"Valor"</span>
                    <span class="text-strong">{format_brl(contract.value)}</span>
                </div>
                <div>
                    <span class="details-label">"Período"</span>
                    <span>
                        {format!("{} - {}", format_date_br(&contract.start_date), format_date_br(&contract.end_date))}
                    </span>
                </div>
                <div>
                    <span class="details-label">"Forma de Pagamento"</span>
                    <span>{contract.payment_method.clone()}</span>
                </div>
            </div>

            <div class="contract-card__badges">
                <span class=status_class>{contract.status.label()}</span>
                <span class=payment_badge_class(contract.payment_status)>{contract.payment_status.label()}</span>
                {contract.next_payment.as_ref().map(|next| view! {
                    <span class="badge badge--outline">{format!("Próximo: {}", format_date_br(next))}</span>
                })}
            </div>

            {overdue_since.map(|since| view! {
                <div class="alert alert--error">
                    {icon("alert-triangle")}
                    <span>{format!("Pagamento em atraso desde {}", format_date_br(&since))}</span>
                </div>
            })}
        </div>
    }
}
