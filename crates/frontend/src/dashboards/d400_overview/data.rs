//! Demo figures of the dashboard overview.

use arcus_core::domain::opportunities::Stage;
use arcus_core::domain::reports::{OverviewMetrics, SectorPerformance};

pub fn overview_metrics() -> OverviewMetrics {
    OverviewMetrics {
        total_clients: 1247,
        active_contracts: 156,
        monthly_revenue: 89500,
        conversion_rate: 23.5,
        new_clients_this_month: 34,
        pending_opportunities: 67,
    }
}

/// Open opportunities per funnel stage across the whole company.
pub fn pipeline_distribution() -> Vec<(Stage, u32)> {
    Stage::FUNNEL.into_iter().zip([45, 32, 23, 18, 12]).collect()
}

pub fn sector_performance() -> Vec<SectorPerformance> {
    [("Comercial", 456, 89), ("Suporte", 234, 45), ("Financeiro", 123, 22), ("Operações", 434, 76)]
        .into_iter()
        .map(|(sector, clients, contracts)| SectorPerformance {
            sector: sector.to_string(),
            clients,
            contracts,
        })
        .collect()
}

/// Attention items listed under "Alertas Importantes": text and tone.
pub const ALERTS: [(&str, &str); 3] = [
    ("15 contratos vencem em 30 dias", "warning"),
    ("8 clientes sem contato há 90 dias", "error"),
    ("23 propostas aguardando retorno", "info"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_distribution_follows_funnel() {
        let pipeline = pipeline_distribution();
        assert_eq!(pipeline.len(), 5);
        assert_eq!(pipeline[0], (Stage::Prospeccao, 45));
        assert_eq!(pipeline[4], (Stage::Fechado, 12));
    }

    #[test]
    fn test_sector_totals() {
        let sectors = sector_performance();
        assert_eq!(sectors.iter().map(|s| s.clients).sum::<u32>(), 1247);
        assert_eq!(overview_metrics().total_clients, 1247);
    }
}
