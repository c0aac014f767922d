//! Modelo de Ordem de Serviço
//!
//! Este módulo contiene el agregado raíz del sistema: la orden de servicio
//! con sus piezas utilizadas, el enum de status y los payloads de escritura.
//! El formato de fecha en el wire es siempre `YYYY-MM-DD`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Status de una orden de servicio
///
/// El backend no restringe las transiciones: cualquier status es alcanzable
/// desde cualquier otro (incluso `Entregue` → `Em andamento`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StatusOrdem {
    #[default]
    #[serde(rename = "Em andamento")]
    EmAndamento,
    #[serde(rename = "Pronto")]
    Pronto,
    #[serde(rename = "Entregue")]
    Entregue,
}

impl StatusOrdem {
    /// Todos los status válidos, en el orden del ciclo de vida típico
    pub fn todos() -> [StatusOrdem; 3] {
        [
            StatusOrdem::EmAndamento,
            StatusOrdem::Pronto,
            StatusOrdem::Entregue,
        ]
    }

    /// Etiqueta tal como la serializa el backend
    pub fn rotulo(&self) -> &'static str {
        match self {
            StatusOrdem::EmAndamento => "Em andamento",
            StatusOrdem::Pronto => "Pronto",
            StatusOrdem::Entregue => "Entregue",
        }
    }
}

impl fmt::Display for StatusOrdem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rotulo())
    }
}

/// Pieza utilizada en una orden de servicio, tal como la devuelve el backend
///
/// `preco_total` es el snapshot tomado al momento de agregar la pieza;
/// cambios posteriores de precio en el catálogo no lo afectan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PecaUtilizada {
    pub id: i32,
    pub quantidade: i32,
    pub preco_total: Decimal,
    pub ordem_servico_id: i32,
    pub peca_id: i32,
    #[serde(default)]
    pub peca_nome: Option<String>,
    #[serde(default)]
    pub preco_unitario: Option<Decimal>,
}

/// Orden de servicio tal como la devuelve el backend
///
/// `pecas_utilizadas` sólo viene poblado en `GET /ordens_servico/{id}`;
/// en los listados el backend lo omite, de ahí el `serde(default)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdemServico {
    pub id: i32,
    pub data_entrada: NaiveDate,
    pub defeito_relatado: Option<String>,
    pub servicos_a_realizar: Option<String>,
    pub status: StatusOrdem,
    pub valor_total: Decimal,
    pub valor_mao_obra: Decimal,
    pub cliente_id: i32,
    pub veiculo_id: i32,
    #[serde(default)]
    pub cliente_nome: Option<String>,
    #[serde(default)]
    pub veiculo_placa: Option<String>,
    #[serde(default)]
    pub pecas_utilizadas: Vec<PecaUtilizada>,
}

/// Payload para crear o reemplazar una orden de servicio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NovaOrdemServico {
    #[validate(range(min = 1))]
    pub cliente_id: i32,

    #[validate(range(min = 1))]
    pub veiculo_id: i32,

    pub data_entrada: NaiveDate,

    pub defeito_relatado: String,

    pub servicos_a_realizar: String,

    #[validate(custom = "crate::utils::validation::validar_preco")]
    pub valor_mao_obra: Decimal,

    pub status: StatusOrdem,

    #[validate]
    pub pecas_utilizadas: Vec<NovaPecaUtilizada>,
}

/// Línea de pieza dentro del payload de una orden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NovaPecaUtilizada {
    #[validate(range(min = 1))]
    pub peca_id: i32,

    #[validate(range(min = 1))]
    pub quantidade: i32,
}

/// Orçamento generado por `GET /ordens_servico/{id}/orcamento`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orcamento {
    pub ordem_servico_id: i32,
    pub cliente_nome: String,
    pub veiculo_placa: String,
    pub data_entrada: NaiveDate,
    pub servicos_a_realizar: Option<String>,
    pub valor_mao_obra: Decimal,
    pub valor_pecas: Decimal,
    pub valor_total: Decimal,
    pub pecas_utilizadas: Vec<PecaUtilizada>,
}
