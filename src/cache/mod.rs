//! Cache
//!
//! Este módulo contiene el cache en memoria de datos de referencia.

pub mod reference_cache;

pub use reference_cache::{CargaErros, ReferenceCache};
