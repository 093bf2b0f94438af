use arcus_core::domain::reports::{average_conversion, format_percent, target_achievement};
use arcus_core::shared::format::{format_brl, format_thousands};
use leptos::prelude::*;

use crate::dashboards::d401_reports::data::{
    competitor_data, performance_data, pipeline_data, sector_data, Insight, COMPETITOR_STRATEGIES,
    PIPELINE_AVERAGE_DAYS, PIPELINE_BOTTLENECKS, PIPELINE_CONVERSION_RATE, SECTOR_HIGHLIGHTS,
};
use crate::shared::components::bar_chart::{BarChart, BarGroup, ChartSeries};
use crate::shared::components::stat_card::StatCard;

fn brl(value: f64) -> String {
    format_brl(value.round() as i64)
}

fn metric_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details-row">
            <span>{label}</span>
            <span class="text-strong">{value}</span>
        </div>
    }
}

fn insights(items: &'static [Insight]) -> impl IntoView {
    items
        .iter()
        .map(|(title, detail, tone)| {
            view! {
                <div class=format!("alert alert--{}", tone)>
                    <div class="text-strong">{*title}</div>
                    <div class="alert__detail">{*detail}</div>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn PipelineReport() -> impl IntoView {
    let data = pipeline_data();
    let total_count: u32 = data.iter().map(|p| p.count).sum();
    let total_value: i64 = data.iter().map(|p| p.value).sum();
    let counts = data
        .iter()
        .map(|p| BarGroup::new(p.stage.clone(), vec![f64::from(p.count)]))
        .collect::<Vec<_>>();
    let values = data
        .iter()
        .map(|p| BarGroup::new(p.stage.clone(), vec![p.value as f64]))
        .collect::<Vec<_>>();

    view! {
        <div class="card">
            <h3 class="card__title">"Pipeline de Vendas - Análise Detalhada"</h3>
            <p class="card__subtitle">"Distribuição e performance do pipeline por etapa"</p>
            <div class="chart-grid">
                <BarChart series=vec![ChartSeries { name: "Oportunidades", class: "bar--blue" }] groups=counts />
                <BarChart series=vec![ChartSeries { name: "Valor", class: "bar--green" }] groups=values format=brl />
            </div>
        </div>
        <div class="chart-grid">
            <div class="card">
                <h3 class="card__title">"Métricas do Pipeline"</h3>
                {metric_row("Total de Oportunidades", total_count.to_string())}
                {metric_row("Valor Total do Pipeline", format_brl(total_value))}
                {metric_row("Taxa de Conversão Média", format_percent(PIPELINE_CONVERSION_RATE))}
                {metric_row("Tempo Médio no Pipeline", format!("{} dias", PIPELINE_AVERAGE_DAYS))}
            </div>
            <div class="card">
                <h3 class="card__title">"Gargalos Identificados"</h3>
                {insights(&PIPELINE_BOTTLENECKS)}
            </div>
        </div>
    }
}

#[component]
pub fn PerformanceReport() -> impl IntoView {
    let data = performance_data();
    let sales: i64 = data.iter().map(|p| p.sales).sum();
    let target: i64 = data.iter().map(|p| p.target).sum();
    let leads: u32 = data.iter().map(|p| p.leads).sum();
    let achievement = target_achievement(&data);
    let conversion = average_conversion(&data);
    let achievement_class = if achievement.is_some_and(|a| a >= 100.0) {
        "badge badge--success"
    } else {
        "badge badge--warning"
    };

    let sales_groups = data
        .iter()
        .map(|p| BarGroup::new(p.month.clone(), vec![p.sales as f64, p.target as f64]))
        .collect::<Vec<_>>();
    let conversion_groups = data
        .iter()
        .map(|p| BarGroup::new(p.month.clone(), vec![p.conversion]))
        .collect::<Vec<_>>();

    view! {
        <div class="card">
            <h3 class="card__title">"Performance de Vendas vs Metas"</h3>
            <p class="card__subtitle">"Comparativo mensal de vendas realizadas e metas estabelecidas"</p>
            <BarChart
                series=vec![
                    ChartSeries { name: "Vendas", class: "bar--green" },
                    ChartSeries { name: "Meta", class: "bar--gray" },
                ]
                groups=sales_groups
                format=brl
            />
        </div>
        <div class="chart-grid">
            <div class="card">
                <h3 class="card__title">"Taxa de Conversão Mensal"</h3>
                <BarChart
                    series=vec![ChartSeries { name: "Conversão", class: "bar--blue" }]
                    groups=conversion_groups
                    format=format_percent
                />
            </div>
            <div class="card">
                <h3 class="card__title">"Resumo do Período"</h3>
                {metric_row("Total de Vendas", format_brl(sales))}
                {metric_row("Meta Total", format_brl(target))}
                <div class="details-row">
                    <span>"Atingimento da Meta"</span>
                    <span class=achievement_class>{achievement.map(format_percent).unwrap_or_else(|| "-".into())}</span>
                </div>
                {metric_row("Leads Gerados", format_thousands(i64::from(leads)))}
                {metric_row("Taxa de Conversão Média", conversion.map(format_percent).unwrap_or_else(|| "-".into()))}
            </div>
        </div>
    }
}

#[component]
pub fn CompetitorReport() -> impl IntoView {
    let rows = competitor_data()
        .into_iter()
        .map(|c| {
            let rate = c.win_rate();
            let badge = if rate >= 60.0 { "badge badge--primary" } else { "badge badge--neutral" };
            view! {
                <div class="card competitor-card">
                    <div class="details-row">
                        <h4>{c.competitor.clone()}</h4>
                        <span class=badge>{format!("{} de sucesso", format_percent(rate))}</span>
                    </div>
                    <div class="competitor-card__grid">
                        <div>
                            <span class="text-success text-strong">{c.wins}</span>
                            <span class="details-label">"Ganhos"</span>
                        </div>
                        <div>
                            <span class="text-error text-strong">{c.losses}</span>
                            <span class="details-label">"Perdas"</span>
                        </div>
                        <div>
                            <div class="progress">
                                <div class="progress__bar" style=format!("width: {:.0}%", rate)></div>
                            </div>
                            <span class="details-label">"Taxa"</span>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card">
            <h3 class="card__title">"Análise de Concorrência"</h3>
            <p class="card__subtitle">"Ganhos e perdas em disputas com cada concorrente"</p>
            {rows}
        </div>
        <div class="card">
            <h3 class="card__title">"Estratégias Recomendadas"</h3>
            {insights(&COMPETITOR_STRATEGIES)}
        </div>
    }
}

#[component]
pub fn SectorReport() -> impl IntoView {
    let data = sector_data();
    let groups = data
        .iter()
        .map(|s| BarGroup::new(s.name.clone(), vec![f64::from(s.value)]))
        .collect::<Vec<_>>();
    let shares = data
        .into_iter()
        .map(|s| {
            view! {
                <div class="details-row sector-share">
                    <span class="text-strong">{s.name}</span>
                    <span>
                        <span class="text-strong">{format!("{}%", s.value)}</span>
                        <span class="details-label">" do total"</span>
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card">
            <h3 class="card__title">"Distribuição por Setor"</h3>
            <p class="card__subtitle">"Participação de cada setor no resultado"</p>
            <div class="chart-grid">
                <BarChart
                    series=vec![ChartSeries { name: "Participação", class: "bar--blue" }]
                    groups=groups
                    format=format_percent
                />
                <div>{shares}</div>
            </div>
        </div>
        <div class="stat-grid">
            {SECTOR_HIGHLIGHTS.into_iter().map(|(label, value, icon_name)| view! {
                <StatCard label=label icon_name=icon_name value=value.to_string() />
            }).collect_view()}
        </div>
    }
}
