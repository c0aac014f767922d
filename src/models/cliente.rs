//! Modelo de Cliente
//!
//! Este módulo contiene el struct Cliente y el payload de escritura para
//! CRUD operations contra `/clientes`.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Cliente tal como lo devuelve el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

/// Payload para crear o actualizar un cliente
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovoCliente {
    #[validate(length(min = 1, max = 100))]
    pub nome: String,

    #[validate(length(max = 20))]
    pub telefone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}
