// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};
use anyhow::Context;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use crate::{
    db::DashboardRepository,
    services::dashboard_service::{DashboardIndicators, DashboardService},
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub indicators: DashboardIndicators,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de busca, o que permite
    /// testar sem mexer nas variáveis do processo.
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 3000)?,
            database: DatabaseConfig {
                url: lookup("DATABASE_URL"),
                host: text("DB_HOST", "localhost"),
                port: parse_or(&lookup, "DB_PORT", 3306)?,
                user: text("DB_USER", "root"),
                password: lookup("DB_PASSWORD"),
                name: text("DB_NAME", "db_prod"),
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
                acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 3)?,
            },
            indicators: DashboardIndicators {
                success_rate: parse_or(&lookup, "DASHBOARD_SUCCESS_RATE", 100.0)?,
                active_alerts: parse_or(&lookup, "DASHBOARD_ACTIVE_ALERTS", 0)?,
            },
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} inválido: {raw:?}")),
        None => Ok(default),
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<MySqlConnectOptions> {
        // DATABASE_URL, quando presente, tem prioridade sobre as partes DB_*
        if let Some(url) = &self.url {
            return MySqlConnectOptions::from_str(url).context("DATABASE_URL inválida");
        }

        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }

    /// Cria a pool sem abrir conexão: a API sobe mesmo com o banco fora do ar.
    pub fn lazy_pool(&self) -> anyhow::Result<MySqlPool> {
        let pool = MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .connect_lazy_with(self.connect_options()?);
        Ok(pool)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(db_pool: MySqlPool, indicators: DashboardIndicators) -> Self {
        // --- Monta o gráfico de dependências ---
        let dashboard_repo = DashboardRepository::new(db_pool);
        let dashboard_service = DashboardService::new(Arc::new(dashboard_repo), indicators);

        Self { dashboard_service }
    }
}

/// Testa uma conexão ao iniciar. Só registra o resultado, não derruba o processo.
pub async fn probe_database(db_pool: &MySqlPool) {
    match db_pool.acquire().await {
        Ok(_conn) => tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!"),
        Err(e) => tracing::error!("🔥 Erro ao conectar ao banco: {}", e),
    }
}
