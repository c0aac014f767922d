//! Utilidades
//!
//! Este módulo contiene los tipos de error del sistema y helpers de
//! validación compartidos.

pub mod errors;
pub mod validation;
