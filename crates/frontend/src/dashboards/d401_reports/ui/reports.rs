use arcus_core::domain::reports::{ExportFormat, ReportKind, ReportPeriod};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::report_views::{CompetitorReport, PerformanceReport, PipelineReport, SectorReport};
use crate::shared::components::toast::use_toaster;
use crate::shared::components::ui::Select;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let toaster = use_toaster();
    let delay_ms = use_context::<AppConfig>()
        .map(|c| c.reports.export_delay_ms)
        .unwrap_or_default();

    let kind = RwSignal::new(ReportKind::default());
    let period = RwSignal::new(ReportPeriod::default());
    let (exporting, set_exporting) = signal(Option::<ExportFormat>::None);

    let export = move |format: ExportFormat| {
        if exporting.get_untracked().is_some() {
            return;
        }
        set_exporting.set(Some(format));
        let (report, over) = (kind.get_untracked(), period.get_untracked());
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            log::info!("Exported report '{}' ({}) as {}", report.id(), over.id(), format.label());
            toaster.success(format.done_message(), format!("{} - {}", report.label(), over.label()));
            set_exporting.set(None);
        });
    };

    let kind_options = Signal::derive(|| {
        ReportKind::ALL
            .into_iter()
            .map(|k| (k.id().to_string(), k.label().to_string()))
            .collect::<Vec<_>>()
    });
    let period_options = Signal::derive(|| {
        ReportPeriod::ALL
            .into_iter()
            .map(|p| (p.id().to_string(), p.label().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <PageFrame page_id="d401_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Relatórios e Análises"</h1>
                    <span class="page__subtitle">"Análises detalhadas de performance e inteligência comercial"</span>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| export(ExportFormat::Pdf)
                            disabled=Signal::derive(move || exporting.get().is_some())
                        >
                            {icon("file-text")}
                            {move || if exporting.get() == Some(ExportFormat::Pdf) { " Exportando..." } else { " PDF" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| export(ExportFormat::Excel)
                            disabled=Signal::derive(move || exporting.get().is_some())
                        >
                            {icon("download")}
                            {move || if exporting.get() == Some(ExportFormat::Excel) { " Exportando..." } else { " Excel" }}
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Select
                                label="Tipo de Relatório"
                                value=Signal::derive(move || kind.get().id().to_string())
                                on_change=Callback::new(move |id: String| {
                                    if let Some(k) = ReportKind::from_id(&id) {
                                        log::debug!("report kind '{}'", k.id());
                                        kind.set(k);
                                    }
                                })
                                options=kind_options
                            />
                            <Select
                                label="Período"
                                value=Signal::derive(move || period.get().id().to_string())
                                on_change=Callback::new(move |id: String| {
                                    if let Some(p) = ReportPeriod::from_id(&id) {
                                        period.set(p);
                                    }
                                })
                                options=period_options
                            />
                        </Flex>
                    </div>
                </div>

                {move || match kind.get() {
                    ReportKind::Pipeline => view! { <PipelineReport /> }.into_any(),
                    ReportKind::Performance => view! { <PerformanceReport /> }.into_any(),
                    ReportKind::Competitors => view! { <CompetitorReport /> }.into_any(),
                    ReportKind::Sectors => view! { <SectorReport /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
