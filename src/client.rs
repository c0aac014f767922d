//! Cliente HTTP del API REST de la oficina
//!
//! Este módulo contiene el cliente HTTP tipado para el backend de la
//! oficina (base path `/api`), cubriendo clientes, vehículos, órdenes de
//! servicio, piezas y relatórios. El subconjunto que consumen el cache y
//! el composer está abstraído en el trait [`OficinaGateway`] para poder
//! sustituirlo por un fake en los tests.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::models::cliente::{Cliente, NovoCliente};
use crate::models::ordem_servico::{
    NovaOrdemServico, NovaPecaUtilizada, Orcamento, OrdemServico, PecaUtilizada, StatusOrdem,
};
use crate::models::peca::{NovaPeca, Peca};
use crate::models::relatorio::{
    DashboardResumo, FaturamentoMensal, PecasMaisUsadas, ServicosMaisRealizados,
};
use crate::models::veiculo::{NovoVeiculo, Veiculo};
use crate::utils::errors::{GatewayError, GatewayResult};

/// Contrato del gateway consumido por el cache de referencia y el composer
///
/// Las operaciones restantes del API (CRUD de entidades simples, relatórios,
/// orçamento) son métodos inherentes de [`OficinaApiClient`] y no forman
/// parte del contrato.
#[async_trait]
pub trait OficinaGateway: Send + Sync {
    async fn listar_clientes(&self) -> GatewayResult<Vec<Cliente>>;
    async fn listar_veiculos(&self) -> GatewayResult<Vec<Veiculo>>;
    async fn listar_veiculos_cliente(&self, cliente_id: i32) -> GatewayResult<Vec<Veiculo>>;
    async fn listar_pecas(&self) -> GatewayResult<Vec<Peca>>;
    async fn listar_ordens(&self, status: Option<StatusOrdem>) -> GatewayResult<Vec<OrdemServico>>;
    async fn criar_ordem(&self, payload: &NovaOrdemServico) -> GatewayResult<OrdemServico>;
    async fn atualizar_ordem(
        &self,
        id: i32,
        payload: &NovaOrdemServico,
    ) -> GatewayResult<OrdemServico>;
    async fn atualizar_status(&self, id: i32, status: StatusOrdem) -> GatewayResult<OrdemServico>;
}

/// Body de error del backend: `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct ErroApi {
    error: Option<String>,
}

/// Body de `PUT /ordens_servico/{id}/status`
#[derive(Debug, Serialize)]
struct AtualizacaoStatus {
    status: StatusOrdem,
}

/// Cliente HTTP tipado del API de la oficina
pub struct OficinaApiClient {
    client: Client,
    base_url: String,
}

impl OficinaApiClient {
    /// Crear el cliente con base URL configurable (sin slash final)
    pub fn new(base_url: &str, timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &EnvironmentConfig) -> GatewayResult<Self> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.http_timeout_seconds),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decodificar una respuesta: no-2xx se convierte en `GatewayError::Api`
    /// con el mensaje del campo `error` del body cuando está presente
    async fn decodificar<T: DeserializeOwned>(response: reqwest::Response) -> GatewayResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErroApi>()
                .await
                .ok()
                .and_then(|e| e.error)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            log::error!("❌ API respondió {}: {}", status.as_u16(), message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// Igual que `decodificar` pero descartando el body de éxito
    /// (los DELETE devuelven sólo `{"message": "..."}`)
    async fn confirmar(response: reqwest::Response) -> GatewayResult<()> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErroApi>()
                .await
                .ok()
                .and_then(|e| e.error)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            log::error!("❌ API respondió {}: {}", status.as_u16(), message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decodificar(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decodificar(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::decodificar(response).await
    }

    async fn delete(&self, path: &str) -> GatewayResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::confirmar(response).await
    }

    // ---- Clientes ----

    pub async fn obter_cliente(&self, id: i32) -> GatewayResult<Cliente> {
        self.get_json(&format!("/clientes/{}", id)).await
    }

    pub async fn criar_cliente(&self, payload: &NovoCliente) -> GatewayResult<Cliente> {
        self.post_json("/clientes", payload).await
    }

    pub async fn atualizar_cliente(&self, id: i32, payload: &NovoCliente) -> GatewayResult<Cliente> {
        self.put_json(&format!("/clientes/{}", id), payload).await
    }

    pub async fn excluir_cliente(&self, id: i32) -> GatewayResult<()> {
        self.delete(&format!("/clientes/{}", id)).await
    }

    // ---- Veículos ----

    pub async fn obter_veiculo(&self, id: i32) -> GatewayResult<Veiculo> {
        self.get_json(&format!("/veiculos/{}", id)).await
    }

    pub async fn buscar_veiculo_por_placa(&self, placa: &str) -> GatewayResult<Veiculo> {
        self.get_json(&format!("/veiculos/buscar/{}", placa)).await
    }

    pub async fn criar_veiculo(&self, payload: &NovoVeiculo) -> GatewayResult<Veiculo> {
        self.post_json("/veiculos", payload).await
    }

    pub async fn atualizar_veiculo(&self, id: i32, payload: &NovoVeiculo) -> GatewayResult<Veiculo> {
        self.put_json(&format!("/veiculos/{}", id), payload).await
    }

    pub async fn excluir_veiculo(&self, id: i32) -> GatewayResult<()> {
        self.delete(&format!("/veiculos/{}", id)).await
    }

    // ---- Ordens de serviço ----

    pub async fn obter_ordem(&self, id: i32) -> GatewayResult<OrdemServico> {
        self.get_json(&format!("/ordens_servico/{}", id)).await
    }

    pub async fn excluir_ordem(&self, id: i32) -> GatewayResult<()> {
        self.delete(&format!("/ordens_servico/{}", id)).await
    }

    pub async fn gerar_orcamento(&self, id: i32) -> GatewayResult<Orcamento> {
        self.get_json(&format!("/ordens_servico/{}/orcamento", id))
            .await
    }

    // ---- Peças ----

    pub async fn obter_peca(&self, id: i32) -> GatewayResult<Peca> {
        self.get_json(&format!("/pecas/{}", id)).await
    }

    pub async fn criar_peca(&self, payload: &NovaPeca) -> GatewayResult<Peca> {
        self.post_json("/pecas", payload).await
    }

    pub async fn atualizar_peca(&self, id: i32, payload: &NovaPeca) -> GatewayResult<Peca> {
        self.put_json(&format!("/pecas/{}", id), payload).await
    }

    pub async fn excluir_peca(&self, id: i32) -> GatewayResult<()> {
        self.delete(&format!("/pecas/{}", id)).await
    }

    // ---- Peças utilizadas em ordens ----

    pub async fn listar_pecas_ordem(&self, ordem_id: i32) -> GatewayResult<Vec<PecaUtilizada>> {
        self.get_json(&format!("/ordens_servico/{}/pecas", ordem_id))
            .await
    }

    pub async fn adicionar_peca_ordem(
        &self,
        ordem_id: i32,
        payload: &NovaPecaUtilizada,
    ) -> GatewayResult<PecaUtilizada> {
        self.post_json(&format!("/ordens_servico/{}/pecas", ordem_id), payload)
            .await
    }

    pub async fn remover_peca_ordem(
        &self,
        ordem_id: i32,
        peca_utilizada_id: i32,
    ) -> GatewayResult<()> {
        self.delete(&format!(
            "/ordens_servico/{}/pecas/{}",
            ordem_id, peca_utilizada_id
        ))
        .await
    }

    // ---- Relatórios ----

    pub async fn faturamento_mensal(
        &self,
        ano: Option<i32>,
        mes: Option<u32>,
    ) -> GatewayResult<FaturamentoMensal> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(ano) = ano {
            query.push(("ano", ano.to_string()));
        }
        if let Some(mes) = mes {
            query.push(("mes", mes.to_string()));
        }
        let response = self
            .client
            .get(self.url("/relatorios/faturamento_mensal"))
            .query(&query)
            .send()
            .await?;
        Self::decodificar(response).await
    }

    pub async fn pecas_mais_usadas(&self, dias: Option<u32>) -> GatewayResult<PecasMaisUsadas> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(dias) = dias {
            query.push(("dias", dias.to_string()));
        }
        let response = self
            .client
            .get(self.url("/relatorios/pecas_mais_usadas"))
            .query(&query)
            .send()
            .await?;
        Self::decodificar(response).await
    }

    pub async fn servicos_mais_realizados(
        &self,
        dias: Option<u32>,
    ) -> GatewayResult<ServicosMaisRealizados> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(dias) = dias {
            query.push(("dias", dias.to_string()));
        }
        let response = self
            .client
            .get(self.url("/relatorios/servicos_mais_realizados"))
            .query(&query)
            .send()
            .await?;
        Self::decodificar(response).await
    }

    pub async fn dashboard(&self) -> GatewayResult<DashboardResumo> {
        self.get_json("/relatorios/dashboard").await
    }
}

#[async_trait]
impl OficinaGateway for OficinaApiClient {
    async fn listar_clientes(&self) -> GatewayResult<Vec<Cliente>> {
        self.get_json("/clientes").await
    }

    async fn listar_veiculos(&self) -> GatewayResult<Vec<Veiculo>> {
        self.get_json("/veiculos").await
    }

    async fn listar_veiculos_cliente(&self, cliente_id: i32) -> GatewayResult<Vec<Veiculo>> {
        self.get_json(&format!("/veiculos/cliente/{}", cliente_id))
            .await
    }

    async fn listar_pecas(&self) -> GatewayResult<Vec<Peca>> {
        self.get_json("/pecas").await
    }

    async fn listar_ordens(&self, status: Option<StatusOrdem>) -> GatewayResult<Vec<OrdemServico>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        let response = self
            .client
            .get(self.url("/ordens_servico"))
            .query(&query)
            .send()
            .await?;
        Self::decodificar(response).await
    }

    async fn criar_ordem(&self, payload: &NovaOrdemServico) -> GatewayResult<OrdemServico> {
        self.post_json("/ordens_servico", payload).await
    }

    async fn atualizar_ordem(
        &self,
        id: i32,
        payload: &NovaOrdemServico,
    ) -> GatewayResult<OrdemServico> {
        self.put_json(&format!("/ordens_servico/{}", id), payload)
            .await
    }

    async fn atualizar_status(&self, id: i32, status: StatusOrdem) -> GatewayResult<OrdemServico> {
        self.put_json(
            &format!("/ordens_servico/{}/status", id),
            &AtualizacaoStatus { status },
        )
        .await
    }
}
