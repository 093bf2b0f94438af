//! Report selectors and the chart series behind the reports and dashboard
//! screens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Pipeline,
    Performance,
    Competitors,
    Sectors,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Pipeline,
        ReportKind::Performance,
        ReportKind::Competitors,
        ReportKind::Sectors,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReportKind::Pipeline => "pipeline",
            ReportKind::Performance => "performance",
            ReportKind::Competitors => "competitor",
            ReportKind::Sectors => "sector",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Pipeline => "Pipeline de Vendas",
            ReportKind::Performance => "Performance vs Meta",
            ReportKind::Competitors => "Análise de Concorrência",
            ReportKind::Sectors => "Performance por Setor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Week,
        ReportPeriod::Month,
        ReportPeriod::Quarter,
        ReportPeriod::Year,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Quarter => "quarter",
            ReportPeriod::Year => "year",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "Última Semana",
            ReportPeriod::Month => "Último Mês",
            ReportPeriod::Quarter => "Último Trimestre",
            ReportPeriod::Year => "Último Ano",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Excel => "EXCEL",
        }
    }

    /// Message shown once the export finishes.
    pub fn done_message(&self) -> String {
        format!("Relatório exportado em {}!", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelinePoint {
    pub stage: String,
    pub count: u32,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub month: String,
    pub sales: i64,
    pub target: i64,
    pub leads: u32,
    /// Conversion rate in percent.
    pub conversion: f64,
}

impl PerformancePoint {
    pub fn hit_target(&self) -> bool {
        self.sales >= self.target
    }
}

/// Sales over target across the series, in percent. `None` with no target.
pub fn target_achievement(points: &[PerformancePoint]) -> Option<f64> {
    let sales: i64 = points.iter().map(|p| p.sales).sum();
    let target: i64 = points.iter().map(|p| p.target).sum();
    (target > 0).then(|| sales as f64 * 100.0 / target as f64)
}

pub fn average_conversion(points: &[PerformancePoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().map(|p| p.conversion).sum::<f64>() / points.len() as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorPoint {
    pub competitor: String,
    pub wins: u32,
    pub losses: u32,
}

impl CompetitorPoint {
    /// Share of deals won against this competitor, in percent.
    pub fn win_rate(&self) -> f64 {
        let total = self.wins + self.losses;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.wins) * 100.0 / f64::from(total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorShare {
    pub name: String,
    /// Percent of the total.
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformance {
    pub sector: String,
    pub clients: u32,
    pub contracts: u32,
}

/// Headline figures of the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    pub total_clients: i64,
    pub active_contracts: i64,
    pub monthly_revenue: i64,
    pub conversion_rate: f64,
    pub new_clients_this_month: i64,
    pub pending_opportunities: i64,
}

/// Formats a percentage with one decimal, pt-BR style: `19.2` → `19,2%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perf(month: &str, sales: i64, target: i64, conversion: f64) -> PerformancePoint {
        PerformancePoint { month: month.into(), sales, target, leads: 100, conversion }
    }

    fn half_year() -> Vec<PerformancePoint> {
        vec![
            perf("Jan", 45000, 50000, 15.0),
            perf("Fev", 52000, 50000, 18.0),
            perf("Mar", 48000, 55000, 16.0),
            perf("Abr", 61000, 55000, 22.0),
            perf("Mai", 58000, 60000, 20.0),
            perf("Jun", 67000, 60000, 24.0),
        ]
    }

    #[test]
    fn test_target_achievement_and_conversion() {
        let points = half_year();
        assert_eq!(format_percent(target_achievement(&points).unwrap()), "100,3%");
        assert_eq!(format_percent(average_conversion(&points).unwrap()), "19,2%");
        assert_eq!(target_achievement(&[]), None);
        assert_eq!(average_conversion(&[]), None);
    }

    #[test]
    fn test_hit_target() {
        let points = half_year();
        let hits: Vec<&str> = points.iter().filter(|p| p.hit_target()).map(|p| p.month.as_str()).collect();
        assert_eq!(hits, vec!["Fev", "Abr", "Jun"]);
    }

    #[test]
    fn test_win_rate() {
        let c = CompetitorPoint { competitor: "Concorrente C".into(), wins: 15, losses: 5 };
        assert_eq!(c.win_rate(), 75.0);
        let general = CompetitorPoint { competitor: "Mercado Geral".into(), wins: 25, losses: 15 };
        assert_eq!(general.win_rate(), 62.5);
        let none = CompetitorPoint { competitor: "X".into(), wins: 0, losses: 0 };
        assert_eq!(none.win_rate(), 0.0);
    }

    #[test]
    fn test_selector_ids() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ReportPeriod::from_id("quarter"), Some(ReportPeriod::Quarter));
        assert_eq!(ReportPeriod::default(), ReportPeriod::Month);
        assert_eq!(ExportFormat::Excel.done_message(), "Relatório exportado em EXCEL!");
    }
}
