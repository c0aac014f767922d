//! Modelo de Peça
//!
//! Este módulo contiene el struct Peca (catálogo de piezas de la oficina)
//! y el payload de escritura.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Pieza del catálogo tal como la devuelve el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peca {
    pub id: i32,
    pub nome: String,
    pub preco_unitario: Decimal,
    pub estoque: i32,
}

/// Payload para crear o actualizar una pieza del catálogo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovaPeca {
    #[validate(length(min = 1, max = 100))]
    pub nome: String,

    #[validate(custom = "crate::utils::validation::validar_preco")]
    pub preco_unitario: Decimal,

    #[validate(range(min = 0))]
    pub estoque: i32,
}
