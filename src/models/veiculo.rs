//! Modelo de Veículo
//!
//! Este módulo contiene el struct Veiculo y el payload de escritura.
//! Cada vehículo pertenece exactamente a un cliente (`cliente_id`).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Vehículo tal como lo devuelve el backend
///
/// `cliente_nome` es un campo denormalizado que el backend incluye en las
/// listas para evitar un lookup adicional en el frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veiculo {
    pub id: i32,
    pub placa: String,
    pub modelo: Option<String>,
    pub ano: Option<i32>,
    pub quilometragem: Option<i32>,
    pub cliente_id: i32,
    #[serde(default)]
    pub cliente_nome: Option<String>,
}

/// Payload para crear o actualizar un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovoVeiculo {
    #[validate(length(min = 1, max = 10))]
    pub placa: String,

    #[validate(length(max = 50))]
    pub modelo: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub ano: Option<i32>,

    #[validate(range(min = 0))]
    pub quilometragem: Option<i32>,

    #[validate(range(min = 1))]
    pub cliente_id: i32,
}
