// src/services/dashboard_service.rs

use std::sync::Arc;
use chrono::{Local, NaiveDate};
use crate::{
    common::error::AppError,
    db::DashboardStore,
    models::dashboard::DashboardSnapshot,
};

pub const RECENT_ACTIVITIES_LIMIT: i64 = 10;

/// Valores reportados como estão; o sistema não calcula essas métricas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardIndicators {
    pub success_rate: f64,
    pub active_alerts: i64,
}

impl Default for DashboardIndicators {
    fn default() -> Self {
        Self { success_rate: 100.0, active_alerts: 0 }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
    indicators: DashboardIndicators,
    today: fn() -> NaiveDate,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DashboardStore>, indicators: DashboardIndicators) -> Self {
        Self { store, indicators, today: local_today }
    }

    #[cfg(test)]
    fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Executa as quatro consultas em sequência e monta o payload.
    ///
    /// A data de "hoje" é lida de novo antes de cada consulta e nada roda
    /// dentro de transação. A primeira falha interrompe o restante.
    pub async fn get_snapshot(&self) -> Result<DashboardSnapshot, AppError> {
        let total_pieces_today = self.store
            .count_pieces_on((self.today)())
            .await
            .inspect_err(|e| tracing::error!("Erro na query totalPiecesToday: {}", e))?;

        let production_by_hour = self.store
            .production_by_hour((self.today)())
            .await
            .inspect_err(|e| tracing::error!("Erro na query productionByHour: {}", e))?;

        let production_by_destination = self.store
            .production_by_destination((self.today)())
            .await
            .inspect_err(|e| tracing::error!("Erro na query productionByDestination: {}", e))?;

        let recent_activities = self.store
            .recent_activities(RECENT_ACTIVITIES_LIMIT)
            .await
            .inspect_err(|e| tracing::error!("Erro na query recentActivities: {}", e))?;

        Ok(DashboardSnapshot {
            total_pieces_today,
            production_by_hour,
            production_by_destination,
            recent_activities,
            success_rate: self.indicators.success_rate,
            active_alerts: self.indicators.active_alerts,
        })
    }
}
