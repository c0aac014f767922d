//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al formato JSON del API REST de la oficina (nombres de campo en
//! portugués, tal como los emite el backend).

pub mod cliente;
pub mod ordem_servico;
pub mod peca;
pub mod relatorio;
pub mod veiculo;
