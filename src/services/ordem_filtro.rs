//! Filtrado de listados de órdenes
//!
//! Helper sin estado para la vista de listado: filtra la colección
//! cargada por igualdad de status. `None` devuelve todas las órdenes.

use crate::models::ordem_servico::{OrdemServico, StatusOrdem};

pub fn filtrar_por_status(
    ordens: &[OrdemServico],
    status: Option<StatusOrdem>,
) -> Vec<&OrdemServico> {
    match status {
        Some(filtro) => ordens.iter().filter(|o| o.status == filtro).collect(),
        None => ordens.iter().collect(),
    }
}
