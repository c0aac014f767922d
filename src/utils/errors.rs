//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema: errores del
//! gateway REST (transporte y respuestas no-2xx) y errores locales del
//! composer de órdenes. Ningún error del gateway se propaga al usuario
//! sin pasar por estos tipos.

use thiserror::Error;

/// Errores al comunicarse con el API REST de la oficina
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Fallo de red o de protocolo (DNS, conexión, timeout, JSON inválido)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Respuesta no-2xx del backend, con el mensaje del campo `error`
    /// del body cuando está presente
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl GatewayError {
    /// Mensaje para mostrar al usuario: el del backend si existe,
    /// sino el genérico recibido como fallback
    pub fn mensagem_usuario(&self, generico: &str) -> String {
        match self {
            GatewayError::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => generico.to_string(),
        }
    }
}

/// Resultado tipado para operaciones contra el gateway
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errores locales del composer de órdenes de servicio
///
/// Los mensajes están en portugués porque se muestran directamente
/// al usuario del console.
#[derive(Error, Debug, PartialEq)]
pub enum ComposerError {
    #[error("Selecione um cliente e um veículo")]
    SelecaoObrigatoria,

    #[error("Valor da mão de obra inválido")]
    ValorMaoObraInvalido,

    #[error("Formato de data inválido. Use YYYY-MM-DD")]
    DataInvalida,

    #[error("Selecione uma peça")]
    PecaNaoSelecionada,

    #[error("Quantidade deve ser maior que zero")]
    QuantidadeInvalida,

    #[error("Peça não encontrada no catálogo")]
    PecaDesconhecida,

    #[error("Peça já adicionada à ordem")]
    PecaDuplicada,

    #[error("Já existe um envio em andamento")]
    EnvioEmAndamento,

    #[error("{0}")]
    Gateway(String),
}
