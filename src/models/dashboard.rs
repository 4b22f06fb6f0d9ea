// src/models/dashboard.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

// 1. Payload completo do painel (montado a cada requisição, nunca persistido)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_pieces_today: i64,
    pub production_by_hour: Vec<HourlyProduction>,
    pub production_by_destination: Vec<DestinationProduction>,
    pub recent_activities: Vec<RecentActivity>,
    pub success_rate: f64,
    pub active_alerts: i64,
}

// 2. Histograma por hora do dia (0-23)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct HourlyProduction {
    pub hour: i64,
    pub count: i64,
}

// 3. Contagem por material/destino
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DestinationProduction {
    pub destination: Option<String>,
    pub count: i64,
}

// 4. Últimas peças produzidas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityOperation {
    Insertion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub timestamp: NaiveDateTime,
    pub operation: ActivityOperation,
    pub status: String, // Sempre vazio: o registro de produção não tem status
    pub piece_type: Option<String>,
    pub destination: Option<String>,
}

// Linha crua vinda do JOIN tb_prod x tb_material
#[derive(Debug, Clone, FromRow)]
pub struct ProductionRow {
    pub data_hora: NaiveDateTime,
    pub tipo_peca: Option<String>,
    pub material: Option<String>,
}

impl From<ProductionRow> for RecentActivity {
    fn from(row: ProductionRow) -> Self {
        Self {
            timestamp: row.data_hora,
            operation: ActivityOperation::Insertion,
            status: String::new(),
            piece_type: row.tipo_peca,
            destination: row.material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn snapshot_serializa_exatamente_os_seis_campos() {
        let snapshot = DashboardSnapshot {
            total_pieces_today: 0,
            production_by_hour: vec![],
            production_by_destination: vec![],
            recent_activities: vec![],
            success_rate: 100.0,
            active_alerts: 0,
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "activeAlerts",
                "productionByDestination",
                "productionByHour",
                "recentActivities",
                "successRate",
                "totalPiecesToday",
            ]
        );
        assert_eq!(value["successRate"], json!(100.0));
    }

    #[test]
    fn linha_de_producao_vira_atividade_de_insercao() {
        let row = ProductionRow {
            data_hora: at(14, 30),
            tipo_peca: Some("A".into()),
            material: Some("Metal".into()),
        };

        let value = serde_json::to_value(RecentActivity::from(row)).unwrap();

        assert_eq!(
            value,
            json!({
                "timestamp": "2026-10-19T14:30:00",
                "operation": "insertion",
                "status": "",
                "pieceType": "A",
                "destination": "Metal",
            })
        );
    }
}
