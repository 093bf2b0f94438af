//! Demo series behind the reports screen.

use arcus_core::domain::reports::{CompetitorPoint, PerformancePoint, PipelinePoint, SectorShare};

pub fn pipeline_data() -> Vec<PipelinePoint> {
    [
        ("Prospecção", 15, 450000),
        ("Qualificação", 12, 380000),
        ("Proposta", 8, 280000),
        ("Negociação", 5, 190000),
        ("Fechado", 3, 95000),
    ]
    .into_iter()
    .map(|(stage, count, value)| PipelinePoint {
        stage: stage.to_string(),
        count,
        value,
    })
    .collect()
}

/// Monthly sales against target; also drives the dashboard chart.
pub fn performance_data() -> Vec<PerformancePoint> {
    [
        ("Jan", 45000, 50000, 120, 15.0),
        ("Fev", 52000, 50000, 135, 18.0),
        ("Mar", 48000, 55000, 145, 16.0),
        ("Abr", 61000, 55000, 160, 22.0),
        ("Mai", 58000, 60000, 155, 20.0),
        ("Jun", 67000, 60000, 170, 24.0),
    ]
    .into_iter()
    .map(|(month, sales, target, leads, conversion)| PerformancePoint {
        month: month.to_string(),
        sales,
        target,
        leads,
        conversion,
    })
    .collect()
}

pub fn competitor_data() -> Vec<CompetitorPoint> {
    [
        ("Concorrente A", 12, 8),
        ("Concorrente B", 8, 12),
        ("Concorrente C", 15, 5),
        ("Mercado Geral", 25, 15),
    ]
    .into_iter()
    .map(|(competitor, wins, losses)| CompetitorPoint {
        competitor: competitor.to_string(),
        wins,
        losses,
    })
    .collect()
}

pub fn sector_data() -> Vec<SectorShare> {
    [("Comercial", 45), ("Suporte", 23), ("Financeiro", 18), ("Operações", 14)]
        .into_iter()
        .map(|(name, value)| SectorShare {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Pipeline figures not derivable from the series above.
pub const PIPELINE_CONVERSION_RATE: f64 = 23.5;
pub const PIPELINE_AVERAGE_DAYS: u32 = 45;

/// (title, detail, tone) notes shown next to a report.
pub type Insight = (&'static str, &'static str, &'static str);

pub const PIPELINE_BOTTLENECKS: [Insight; 3] = [
    ("Etapa: Qualificação", "Tempo médio: 18 dias (acima da média)", "warning"),
    ("Etapa: Negociação", "Taxa de conversão: 62% (abaixo da meta)", "error"),
    ("Recomendação", "Revisar processo de qualificação", "info"),
];

pub const COMPETITOR_STRATEGIES: [Insight; 3] = [
    ("Concorrente C - Alta taxa de sucesso", "Analisar diferenciais e estratégias utilizadas", "success"),
    ("Concorrente B - Necessita atenção", "Revisar abordagem e propostas de valor", "warning"),
    ("Oportunidade Identificada", "Segmento com baixa concorrência detectado", "info"),
];

/// (label, value, icon) cards under the sector report.
pub const SECTOR_HIGHLIGHTS: [(&str, &str, &str); 4] = [
    ("Setor Líder", "Comercial", "target"),
    ("Maior Crescimento", "Suporte", "trending-up"),
    ("Total de Setores", "4", "users"),
    ("Receita Total", "R$ 1.2M", "dollar-sign"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use arcus_core::domain::reports::{average_conversion, format_percent, target_achievement};

    #[test]
    fn test_pipeline_totals() {
        let pipeline = pipeline_data();
        assert_eq!(pipeline.iter().map(|p| p.count).sum::<u32>(), 43);
        assert_eq!(pipeline.iter().map(|p| p.value).sum::<i64>(), 1_395_000);
    }

    #[test]
    fn test_performance_summary() {
        let data = performance_data();
        assert_eq!(data.iter().map(|p| p.sales).sum::<i64>(), 331000);
        assert_eq!(data.iter().map(|p| p.leads).sum::<u32>(), 885);
        assert_eq!(format_percent(target_achievement(&data).unwrap()), "100,3%");
        assert_eq!(format_percent(average_conversion(&data).unwrap()), "19,2%");
    }

    #[test]
    fn test_sector_shares_add_up() {
        assert_eq!(sector_data().iter().map(|s| s.value).sum::<u32>(), 100);
    }
}
