// src/db/dashboard_repo.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;
use crate::{
    common::error::AppError,
    models::dashboard::{DestinationProduction, HourlyProduction, ProductionRow, RecentActivity},
};

/// Leituras que o painel faz sobre `tb_prod` / `tb_material`.
///
/// Cada método é uma consulta independente; quem chama decide a ordem.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn count_pieces_on(&self, day: NaiveDate) -> Result<i64, AppError>;

    async fn production_by_hour(&self, day: NaiveDate) -> Result<Vec<HourlyProduction>, AppError>;

    async fn production_by_destination(
        &self,
        day: NaiveDate,
    ) -> Result<Vec<DestinationProduction>, AppError>;

    async fn recent_activities(&self, limit: i64) -> Result<Vec<RecentActivity>, AppError>;
}

#[derive(Clone)]
pub struct DashboardRepository {
    pool: MySqlPool,
}

impl DashboardRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    // 1. Total de peças do dia
    async fn count_pieces_on(&self, day: NaiveDate) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tb_prod WHERE DATE(data_hora) = ?",
        )
            .bind(day)
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    // 2. Produção por hora (no máximo 24 linhas, uma por hora)
    async fn production_by_hour(&self, day: NaiveDate) -> Result<Vec<HourlyProduction>, AppError> {
        // HOUR() volta como INT; o CAST garante BIGINT com sinal para o i64
        let data = sqlx::query_as::<_, HourlyProduction>(
            r#"
            SELECT
                CAST(HOUR(data_hora) AS SIGNED) AS hour,
                COUNT(*) AS count
            FROM tb_prod
            WHERE DATE(data_hora) = ?
            GROUP BY HOUR(data_hora)
            ORDER BY HOUR(data_hora) ASC
            LIMIT 24
            "#,
        )
            .bind(day)
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    // 3. Produção por material/destino (ordem fica a critério do banco)
    async fn production_by_destination(
        &self,
        day: NaiveDate,
    ) -> Result<Vec<DestinationProduction>, AppError> {
        let data = sqlx::query_as::<_, DestinationProduction>(
            r#"
            SELECT
                m.material AS destination,
                COUNT(*) AS count
            FROM tb_prod p
            JOIN tb_material m ON p.id_material = m.id_material
            WHERE DATE(p.data_hora) = ?
            GROUP BY m.material
            "#,
        )
            .bind(day)
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    // 4. Atividades recentes (sem filtro de data)
    async fn recent_activities(&self, limit: i64) -> Result<Vec<RecentActivity>, AppError> {
        let rows = sqlx::query_as::<_, ProductionRow>(
            r#"
            SELECT
                p.data_hora,
                CAST(p.tipo_peca AS CHAR) AS tipo_peca,
                m.material
            FROM tb_prod p
            JOIN tb_material m ON p.id_material = m.id_material
            ORDER BY p.data_hora DESC
            LIMIT ?
            "#,
        )
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RecentActivity::from).collect())
    }
}
