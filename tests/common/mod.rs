#![allow(dead_code)]
//! Soporte de tests: un gateway en memoria que registra cada llamada
//! y simula el comportamiento del backend de la oficina.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use oficina_console::client::OficinaGateway;
use oficina_console::models::cliente::Cliente;
use oficina_console::models::ordem_servico::{
    NovaOrdemServico, OrdemServico, PecaUtilizada, StatusOrdem,
};
use oficina_console::models::peca::Peca;
use oficina_console::models::veiculo::Veiculo;
use oficina_console::utils::errors::{GatewayError, GatewayResult};

#[derive(Default)]
pub struct FakeGateway {
    pub clientes: Vec<Cliente>,
    pub veiculos: Vec<Veiculo>,
    pub pecas: Vec<Peca>,
    pub veiculos_por_cliente: HashMap<i32, Vec<Veiculo>>,
    pub ordens: Mutex<Vec<OrdemServico>>,
    /// Recursos de lectura que deben fallar ("clientes", "veiculos", ...)
    pub falhas: HashSet<&'static str>,
    /// Mensaje de error a devolver en criar/atualizar ordem
    pub erro_ordem: Option<String>,
    chamadas: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chamadas(&self) -> Vec<String> {
        self.chamadas.lock().unwrap().clone()
    }

    fn registrar(&self, chamada: String) {
        self.chamadas.lock().unwrap().push(chamada);
    }

    fn falha_simulada() -> GatewayError {
        GatewayError::Api {
            status: 500,
            message: "falha simulada".to_string(),
        }
    }

    /// Construir una orden persistida a partir del payload, resolviendo
    /// los snapshots de piezas contra el catálogo (como hace el backend)
    fn materializar_ordem(&self, id: i32, payload: &NovaOrdemServico) -> OrdemServico {
        let pecas_utilizadas: Vec<PecaUtilizada> = payload
            .pecas_utilizadas
            .iter()
            .enumerate()
            .map(|(i, linha)| {
                let preco_unitario = self
                    .pecas
                    .iter()
                    .find(|p| p.id == linha.peca_id)
                    .map(|p| p.preco_unitario)
                    .unwrap_or(Decimal::ZERO);
                PecaUtilizada {
                    id: id * 100 + i as i32,
                    quantidade: linha.quantidade,
                    preco_total: preco_unitario * Decimal::from(linha.quantidade),
                    ordem_servico_id: id,
                    peca_id: linha.peca_id,
                    peca_nome: self
                        .pecas
                        .iter()
                        .find(|p| p.id == linha.peca_id)
                        .map(|p| p.nome.clone()),
                    preco_unitario: Some(preco_unitario),
                }
            })
            .collect();

        let valor_pecas: Decimal = pecas_utilizadas.iter().map(|p| p.preco_total).sum();

        OrdemServico {
            id,
            data_entrada: payload.data_entrada,
            defeito_relatado: Some(payload.defeito_relatado.clone()),
            servicos_a_realizar: Some(payload.servicos_a_realizar.clone()),
            status: payload.status,
            valor_total: payload.valor_mao_obra + valor_pecas,
            valor_mao_obra: payload.valor_mao_obra,
            cliente_id: payload.cliente_id,
            veiculo_id: payload.veiculo_id,
            cliente_nome: None,
            veiculo_placa: None,
            pecas_utilizadas,
        }
    }
}

#[async_trait]
impl OficinaGateway for FakeGateway {
    async fn listar_clientes(&self) -> GatewayResult<Vec<Cliente>> {
        self.registrar("GET /clientes".to_string());
        if self.falhas.contains("clientes") {
            return Err(Self::falha_simulada());
        }
        Ok(self.clientes.clone())
    }

    async fn listar_veiculos(&self) -> GatewayResult<Vec<Veiculo>> {
        self.registrar("GET /veiculos".to_string());
        if self.falhas.contains("veiculos") {
            return Err(Self::falha_simulada());
        }
        Ok(self.veiculos.clone())
    }

    async fn listar_veiculos_cliente(&self, cliente_id: i32) -> GatewayResult<Vec<Veiculo>> {
        self.registrar(format!("GET /veiculos/cliente/{}", cliente_id));
        if self.falhas.contains("veiculos_cliente") {
            return Err(Self::falha_simulada());
        }
        Ok(self
            .veiculos_por_cliente
            .get(&cliente_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn listar_pecas(&self) -> GatewayResult<Vec<Peca>> {
        self.registrar("GET /pecas".to_string());
        if self.falhas.contains("pecas") {
            return Err(Self::falha_simulada());
        }
        Ok(self.pecas.clone())
    }

    async fn listar_ordens(&self, status: Option<StatusOrdem>) -> GatewayResult<Vec<OrdemServico>> {
        match status {
            Some(s) => self.registrar(format!("GET /ordens_servico?status={}", s)),
            None => self.registrar("GET /ordens_servico".to_string()),
        }
        if self.falhas.contains("ordens") {
            return Err(Self::falha_simulada());
        }
        let ordens = self.ordens.lock().unwrap();
        Ok(match status {
            Some(s) => ordens.iter().filter(|o| o.status == s).cloned().collect(),
            None => ordens.clone(),
        })
    }

    async fn criar_ordem(&self, payload: &NovaOrdemServico) -> GatewayResult<OrdemServico> {
        self.registrar("POST /ordens_servico".to_string());
        if let Some(mensagem) = &self.erro_ordem {
            return Err(GatewayError::Api {
                status: 400,
                message: mensagem.clone(),
            });
        }
        let mut ordens = self.ordens.lock().unwrap();
        let id = 100 + ordens.len() as i32;
        let ordem = self.materializar_ordem(id, payload);
        ordens.push(ordem.clone());
        Ok(ordem)
    }

    async fn atualizar_ordem(
        &self,
        id: i32,
        payload: &NovaOrdemServico,
    ) -> GatewayResult<OrdemServico> {
        self.registrar(format!("PUT /ordens_servico/{}", id));
        if let Some(mensagem) = &self.erro_ordem {
            return Err(GatewayError::Api {
                status: 400,
                message: mensagem.clone(),
            });
        }
        let mut ordens = self.ordens.lock().unwrap();
        let ordem = self.materializar_ordem(id, payload);
        match ordens.iter_mut().find(|o| o.id == id) {
            Some(existente) => {
                *existente = ordem.clone();
                Ok(ordem)
            }
            None => Err(GatewayError::Api {
                status: 404,
                message: "Ordem de serviço não encontrada".to_string(),
            }),
        }
    }

    async fn atualizar_status(&self, id: i32, status: StatusOrdem) -> GatewayResult<OrdemServico> {
        self.registrar(format!("PUT /ordens_servico/{}/status {}", id, status));
        let mut ordens = self.ordens.lock().unwrap();
        match ordens.iter_mut().find(|o| o.id == id) {
            Some(ordem) => {
                ordem.status = status;
                Ok(ordem.clone())
            }
            None => Err(GatewayError::Api {
                status: 404,
                message: "Ordem de serviço não encontrada".to_string(),
            }),
        }
    }
}

// ---- builders de datos de prueba ----

pub fn cliente(id: i32, nome: &str) -> Cliente {
    Cliente {
        id,
        nome: nome.to_string(),
        telefone: None,
        email: None,
    }
}

pub fn veiculo(id: i32, placa: &str, cliente_id: i32) -> Veiculo {
    Veiculo {
        id,
        placa: placa.to_string(),
        modelo: Some("Gol".to_string()),
        ano: Some(2018),
        quilometragem: Some(75_000),
        cliente_id,
        cliente_nome: None,
    }
}

pub fn peca(id: i32, nome: &str, preco: Decimal) -> Peca {
    Peca {
        id,
        nome: nome.to_string(),
        preco_unitario: preco,
        estoque: 50,
    }
}

pub fn ordem(id: i32, cliente_id: i32, veiculo_id: i32, status: StatusOrdem) -> OrdemServico {
    OrdemServico {
        id,
        data_entrada: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        defeito_relatado: Some("Barulho no motor".to_string()),
        servicos_a_realizar: Some("Troca de óleo".to_string()),
        status,
        valor_total: Decimal::new(15000, 2),
        valor_mao_obra: Decimal::new(15000, 2),
        cliente_id,
        veiculo_id,
        cliente_nome: None,
        veiculo_placa: None,
        pecas_utilizadas: vec![],
    }
}
