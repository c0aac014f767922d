//! Núcleo del console administrativo de la oficina mecánica
//!
//! Este crate contiene la lógica cliente del console: el cache de datos de
//! referencia (clientes, vehículos, piezas, órdenes), el composer de órdenes
//! de servicio y el cliente HTTP tipado del API REST del backend.

pub mod cache;
pub mod client;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;
