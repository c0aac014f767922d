//! Services module
//!
//! Este módulo contiene la lógica de negocio del console: el composer de
//! órdenes de servicio y el helper de filtrado de listados.

pub mod ordem_composer_service;
pub mod ordem_filtro;

pub use ordem_composer_service::*;
pub use ordem_filtro::*;
