//! Smoke check del console de la oficina
//!
//! Binario de verificación manual contra un backend corriendo: carga los
//! datos de referencia, resume las órdenes por status y consulta el
//! dashboard. No modifica nada.

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use oficina_console::cache::ReferenceCache;
use oficina_console::client::OficinaApiClient;
use oficina_console::config::environment::EnvironmentConfig;
use oficina_console::models::ordem_servico::StatusOrdem;
use oficina_console::services::filtrar_por_status;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🔧 Oficina Console - smoke check");
    info!("================================");

    let config = EnvironmentConfig::default();
    info!("🌐 API: {} ({})", config.api_base_url, config.environment);

    let client = OficinaApiClient::from_config(&config)?;

    let mut cache = ReferenceCache::new();
    cache.carregar_tudo(&client).await;

    if cache.erros.algum() {
        warn!("⚠️ Algunos recursos no cargaron: {:?}", cache.erros);
    }

    info!(
        "📋 {} clientes, {} vehículos, {} piezas, {} órdenes",
        cache.clientes.len(),
        cache.veiculos.len(),
        cache.pecas.len(),
        cache.ordens.len()
    );

    for status in StatusOrdem::todos() {
        let cantidad = filtrar_por_status(&cache.ordens, Some(status)).len();
        info!("   {} → {}", status, cantidad);
    }

    match client.dashboard().await {
        Ok(resumo) => {
            info!(
                "📊 Faturamento {}/{}: {} ({} órdenes)",
                resumo.faturamento_mes_atual.mes,
                resumo.faturamento_mes_atual.ano,
                resumo.faturamento_mes_atual.valor_total,
                resumo.faturamento_mes_atual.total_ordens
            );
        }
        Err(e) => warn!("📊 Dashboard indisponible: {}", e),
    }

    Ok(())
}
