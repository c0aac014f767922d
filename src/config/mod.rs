//! Configuración
//!
//! Este módulo maneja la configuración del entorno.

pub mod environment;
