use arcus_core::domain::reports::format_percent;
use arcus_core::shared::format::{format_brl, format_thousands};
use arcus_core::system::navigation::{can_open, Section};
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d400_overview::data::{overview_metrics, pipeline_distribution, sector_performance, ALERTS};
use crate::dashboards::d401_reports::data::performance_data;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::bar_chart::{BarChart, BarGroup, ChartSeries};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_current_user;

fn brl(value: f64) -> String {
    format_brl(value.round() as i64)
}

/// Shortcut into another section, hidden when the user may not open it.
#[component]
fn QuickAction(section: Section, icon_name: &'static str, label: &'static str) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let user = use_current_user();
    let allowed = move || user.with(|u| u.as_ref().is_some_and(|u| can_open(&u.permissions, section)));

    view! {
        <Show when=allowed>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.open_section(section)>
                {icon(icon_name)}
                {format!(" {}", label)}
            </Button>
        </Show>
    }
}

#[component]
pub fn DashboardOverview() -> impl IntoView {
    let user = use_current_user();
    let welcome = move || {
        user.with(|u| {
            u.as_ref()
                .map(|u| format!("Bem-vindo, {} • {}", u.name, u.sector))
                .unwrap_or_default()
        })
    };

    let metrics = overview_metrics();

    let pipeline_groups = pipeline_distribution()
        .into_iter()
        .map(|(stage, count)| BarGroup::new(stage.label(), vec![f64::from(count)]))
        .collect::<Vec<_>>();
    let monthly_groups = performance_data()
        .into_iter()
        .map(|p| BarGroup::new(p.month, vec![p.sales as f64, p.target as f64]))
        .collect::<Vec<_>>();
    let sector_groups = sector_performance()
        .into_iter()
        .map(|s| BarGroup::new(s.sector, vec![f64::from(s.clients), f64::from(s.contracts)]))
        .collect::<Vec<_>>();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard Comercial"</h1>
                    <span class="page__subtitle">{welcome}</span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total de Clientes"
                        icon_name="users"
                        value=format_thousands(metrics.total_clients)
                        subtitle=format!("+{} novos este mês", metrics.new_clients_this_month)
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="Contratos Ativos"
                        icon_name="file-text"
                        value=format_thousands(metrics.active_contracts)
                        subtitle="+8% vs mês anterior"
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="Receita Mensal"
                        icon_name="dollar-sign"
                        value=format_brl(metrics.monthly_revenue)
                        subtitle="+15% vs mês anterior"
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="Taxa de Conversão"
                        icon_name="target"
                        value=format_percent(metrics.conversion_rate)
                        subtitle=format!("{} oportunidades pendentes", metrics.pending_opportunities)
                        tone=StatTone::Error
                    />
                </div>

                <div class="chart-grid">
                    <div class="card">
                        <h3 class="card__title">"Pipeline de Vendas"</h3>
                        <p class="card__subtitle">"Distribuição de oportunidades por etapa"</p>
                        <BarChart
                            series=vec![ChartSeries { name: "Oportunidades", class: "bar--purple" }]
                            groups=pipeline_groups
                        />
                    </div>
                    <div class="card">
                        <h3 class="card__title">"Performance vs Meta"</h3>
                        <p class="card__subtitle">"Vendas mensais comparadas às metas"</p>
                        <BarChart
                            series=vec![
                                ChartSeries { name: "Vendas", class: "bar--blue" },
                                ChartSeries { name: "Meta", class: "bar--gray" },
                            ]
                            groups=monthly_groups
                            format=brl
                        />
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">"Performance por Setor"</h3>
                    <p class="card__subtitle">"Distribuição de clientes e contratos por setor"</p>
                    <BarChart
                        series=vec![
                            ChartSeries { name: "Clientes", class: "bar--cyan" },
                            ChartSeries { name: "Contratos", class: "bar--green" },
                        ]
                        groups=sector_groups
                    />
                </div>

                <div class="chart-grid">
                    <div class="card">
                        <h3 class="card__title">{icon("alert-triangle")}" Alertas Importantes"</h3>
                        {ALERTS.into_iter().map(|(text, tone)| view! {
                            <div class=format!("alert alert--{}", tone)>{text}</div>
                        }).collect_view()}
                    </div>
                    <div class="card">
                        <h3 class="card__title">{icon("activity")}" Ações Rápidas"</h3>
                        <Flex vertical=true gap=FlexGap::Small>
                            <QuickAction section=Section::Clients icon_name="users" label="Cadastrar novo cliente" />
                            <QuickAction section=Section::Contracts icon_name="file-text" label="Ver contratos" />
                            <QuickAction
                                section=Section::Opportunities
                                icon_name="trending-up"
                                label="Registrar oportunidade"
                            />
                        </Flex>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
