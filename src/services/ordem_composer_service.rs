//! Composer de órdenes de servicio
//!
//! Este módulo contiene el borrador (draft) de una orden de servicio en
//! creación o edición: cliente y vehículo seleccionados, campos de texto,
//! valor de mano de obra, status y líneas de piezas con snapshot de precio.
//! El draft pasa por las fases `Empty → Editing → Submitting →
//! (Committed | Failed)`; la fase `Submitting` bloquea envíos duplicados.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::cache::ReferenceCache;
use crate::client::OficinaGateway;
use crate::models::ordem_servico::{
    NovaOrdemServico, NovaPecaUtilizada, OrdemServico, PecaUtilizada, StatusOrdem,
};
use crate::models::peca::Peca;
use crate::utils::errors::ComposerError;
use crate::utils::validation::{parse_valor_mao_obra, validar_data};

/// Fase del ciclo de vida del draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    /// Estado inicial o recién limpiado
    Empty,
    /// Hay cambios sin enviar
    Editing,
    /// Hay un request de envío en vuelo; no se admite otro
    Submitting,
    /// El último envío fue aceptado y el draft fue limpiado
    Committed,
    /// El último envío falló; el draft se conserva para reintentar
    Failed,
}

/// Línea de pieza del draft, con snapshot de nombre y precio unitario
/// tomado al momento de agregarla
#[derive(Debug, Clone, PartialEq)]
pub struct PecaLinha {
    pub peca_id: i32,
    pub peca_nome: String,
    pub preco_unitario: Decimal,
    pub quantidade: i32,
    pub preco_total: Decimal,
}

/// Borrador de una orden de servicio
///
/// `valor_mao_obra` se guarda como texto crudo del formulario y se
/// convierte recién al enviar (vacío equivale a 0).
#[derive(Debug, Clone, PartialEq)]
pub struct OrdemDraft {
    pub cliente_id: Option<i32>,
    pub veiculo_id: Option<i32>,
    pub data_entrada: NaiveDate,
    pub defeito_relatado: String,
    pub servicos_a_realizar: String,
    pub valor_mao_obra: String,
    pub status: StatusOrdem,
    pub pecas: Vec<PecaLinha>,
}

impl Default for OrdemDraft {
    fn default() -> Self {
        Self {
            cliente_id: None,
            veiculo_id: None,
            data_entrada: Local::now().date_naive(),
            defeito_relatado: String::new(),
            servicos_a_realizar: String::new(),
            valor_mao_obra: String::new(),
            status: StatusOrdem::default(),
            pecas: Vec::new(),
        }
    }
}

impl OrdemDraft {
    /// Total del draft para mostrar en pantalla: mano de obra + piezas
    ///
    /// Lectura tolerante: un valor de mano de obra todavía no parseable
    /// cuenta como 0. La validación estricta ocurre al enviar.
    pub fn total(&self) -> Decimal {
        let mao_obra = parse_valor_mao_obra(&self.valor_mao_obra).unwrap_or(Decimal::ZERO);
        mao_obra + self.pecas.iter().map(|p| p.preco_total).sum::<Decimal>()
    }
}

/// Total de una orden ya persistida: mano de obra + piezas utilizadas
///
/// Sólo para display; el backend deriva y persiste su propio
/// `valor_total`, que esta capa no recalcula ni reenvía.
pub fn total_ordem(valor_mao_obra: Decimal, pecas: &[PecaUtilizada]) -> Decimal {
    valor_mao_obra + pecas.iter().map(|p| p.preco_total).sum::<Decimal>()
}

/// Composer de órdenes de servicio
///
/// Mantiene un único draft por vez, tanto para creación como para edición
/// (`editando` guarda el id de la orden cuando es un reemplazo completo).
#[derive(Debug)]
pub struct OrdemComposer {
    draft: OrdemDraft,
    editando: Option<i32>,
    fase: DraftPhase,
}

impl Default for OrdemComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrdemComposer {
    pub fn new() -> Self {
        Self {
            draft: OrdemDraft::default(),
            editando: None,
            fase: DraftPhase::Empty,
        }
    }

    pub fn draft(&self) -> &OrdemDraft {
        &self.draft
    }

    pub fn fase(&self) -> DraftPhase {
        self.fase
    }

    /// Id de la orden en edición, `None` si el draft es una orden nueva
    pub fn editando(&self) -> Option<i32> {
        self.editando
    }

    /// Descartar el draft y volver al estado inicial
    pub fn limpar(&mut self) {
        self.draft = OrdemDraft::default();
        self.editando = None;
        self.fase = DraftPhase::Empty;
    }

    /// Prefillear el draft desde una orden existente para editarla
    ///
    /// Las líneas de piezas conservan el snapshot que el backend guardó
    /// al momento en que cada pieza fue agregada.
    pub fn iniciar_edicao(&mut self, ordem: &OrdemServico) {
        self.editando = Some(ordem.id);
        self.draft = OrdemDraft {
            cliente_id: Some(ordem.cliente_id),
            veiculo_id: Some(ordem.veiculo_id),
            data_entrada: ordem.data_entrada,
            defeito_relatado: ordem.defeito_relatado.clone().unwrap_or_default(),
            servicos_a_realizar: ordem.servicos_a_realizar.clone().unwrap_or_default(),
            valor_mao_obra: if ordem.valor_mao_obra.is_zero() {
                String::new()
            } else {
                ordem.valor_mao_obra.to_string()
            },
            status: ordem.status,
            pecas: ordem
                .pecas_utilizadas
                .iter()
                .map(|p| {
                    let preco_unitario = p.preco_unitario.unwrap_or_else(|| {
                        if p.quantidade > 0 {
                            p.preco_total / Decimal::from(p.quantidade)
                        } else {
                            Decimal::ZERO
                        }
                    });
                    PecaLinha {
                        peca_id: p.peca_id,
                        peca_nome: p.peca_nome.clone().unwrap_or_default(),
                        preco_unitario,
                        quantidade: p.quantidade,
                        preco_total: p.preco_total,
                    }
                })
                .collect(),
        };
        self.fase = DraftPhase::Editing;
    }

    /// Seleccionar el cliente del draft
    ///
    /// Limpia el vehículo seleccionado y recarga la lista de vehículos
    /// del cliente en el cache; el selector de vehículos queda acotado a
    /// los vehículos de ese cliente.
    pub async fn selecionar_cliente<G: OficinaGateway + ?Sized>(
        &mut self,
        cache: &mut ReferenceCache,
        gateway: &G,
        cliente_id: Option<i32>,
    ) {
        self.draft.cliente_id = cliente_id;
        self.draft.veiculo_id = None;
        self.fase = DraftPhase::Editing;
        cache.carregar_veiculos_cliente(gateway, cliente_id).await;
    }

    pub fn selecionar_veiculo(&mut self, veiculo_id: Option<i32>) {
        self.draft.veiculo_id = veiculo_id;
        self.fase = DraftPhase::Editing;
    }

    /// Setear la fecha de entrada desde el campo de texto del formulario
    pub fn definir_data(&mut self, texto: &str) -> Result<(), ComposerError> {
        let data = validar_data(texto).map_err(|_| ComposerError::DataInvalida)?;
        self.draft.data_entrada = data;
        self.fase = DraftPhase::Editing;
        Ok(())
    }

    pub fn definir_defeito(&mut self, texto: impl Into<String>) {
        self.draft.defeito_relatado = texto.into();
        self.fase = DraftPhase::Editing;
    }

    pub fn definir_servicos(&mut self, texto: impl Into<String>) {
        self.draft.servicos_a_realizar = texto.into();
        self.fase = DraftPhase::Editing;
    }

    pub fn definir_valor_mao_obra(&mut self, texto: impl Into<String>) {
        self.draft.valor_mao_obra = texto.into();
        self.fase = DraftPhase::Editing;
    }

    pub fn definir_status(&mut self, status: StatusOrdem) {
        self.draft.status = status;
        self.fase = DraftPhase::Editing;
    }

    /// Agregar una línea de pieza al draft
    ///
    /// Rechaza pieza sin seleccionar, cantidad no positiva, pieza
    /// desconocida en el catálogo y pieza repetida (para cambiar la
    /// cantidad hay que quitar la línea y volver a agregarla). En éxito
    /// toma snapshot del nombre y el precio unitario vigentes.
    pub fn adicionar_peca(
        &mut self,
        catalogo: &[Peca],
        peca_id: Option<i32>,
        quantidade: i32,
    ) -> Result<(), ComposerError> {
        let peca_id = peca_id.ok_or(ComposerError::PecaNaoSelecionada)?;
        if quantidade <= 0 {
            return Err(ComposerError::QuantidadeInvalida);
        }
        let peca = catalogo
            .iter()
            .find(|p| p.id == peca_id)
            .ok_or(ComposerError::PecaDesconhecida)?;
        if self.draft.pecas.iter().any(|p| p.peca_id == peca_id) {
            return Err(ComposerError::PecaDuplicada);
        }

        self.draft.pecas.push(PecaLinha {
            peca_id,
            peca_nome: peca.nome.clone(),
            preco_unitario: peca.preco_unitario,
            quantidade,
            preco_total: peca.preco_unitario * Decimal::from(quantidade),
        });
        self.fase = DraftPhase::Editing;
        Ok(())
    }

    /// Quitar una línea de pieza por posición; fuera de rango es un no-op
    pub fn remover_peca(&mut self, indice: usize) {
        if indice >= self.draft.pecas.len() {
            log::warn!("⚠️ Índice de pieza fuera de rango: {}", indice);
            return;
        }
        self.draft.pecas.remove(indice);
        self.fase = DraftPhase::Editing;
    }

    /// Construir el payload normalizado, validando el draft
    ///
    /// Falla sin tocar la red si falta cliente o vehículo, o si el valor
    /// de mano de obra no parsea a un número no negativo.
    fn montar_payload(&self) -> Result<NovaOrdemServico, ComposerError> {
        let cliente_id = self
            .draft
            .cliente_id
            .filter(|id| *id > 0)
            .ok_or(ComposerError::SelecaoObrigatoria)?;
        let veiculo_id = self
            .draft
            .veiculo_id
            .filter(|id| *id > 0)
            .ok_or(ComposerError::SelecaoObrigatoria)?;
        let valor_mao_obra = parse_valor_mao_obra(&self.draft.valor_mao_obra)
            .map_err(|_| ComposerError::ValorMaoObraInvalido)?;

        Ok(NovaOrdemServico {
            cliente_id,
            veiculo_id,
            data_entrada: self.draft.data_entrada,
            defeito_relatado: self.draft.defeito_relatado.clone(),
            servicos_a_realizar: self.draft.servicos_a_realizar.clone(),
            valor_mao_obra,
            status: self.draft.status,
            pecas_utilizadas: self
                .draft
                .pecas
                .iter()
                .map(|p| NovaPecaUtilizada {
                    peca_id: p.peca_id,
                    quantidade: p.quantidade,
                })
                .collect(),
        })
    }

    /// Enviar el draft al gateway (POST si es nuevo, PUT si es edición)
    ///
    /// En éxito limpia el draft, pasa a `Committed` y recarga el cache.
    /// En fallo conserva el draft intacto, pasa a `Failed` y reporta el
    /// mensaje del backend tal cual cuando existe.
    pub async fn submeter<G: OficinaGateway + ?Sized>(
        &mut self,
        gateway: &G,
        cache: &mut ReferenceCache,
    ) -> Result<OrdemServico, ComposerError> {
        if self.fase() == DraftPhase::Submitting {
            return Err(ComposerError::EnvioEmAndamento);
        }

        let payload = self.montar_payload()?;
        self.fase = DraftPhase::Submitting;

        let resultado = match self.editando {
            Some(id) => gateway.atualizar_ordem(id, &payload).await,
            None => gateway.criar_ordem(&payload).await,
        };

        match resultado {
            Ok(ordem) => {
                log::info!("✅ Ordem de serviço {} guardada", ordem.id);
                self.limpar();
                self.fase = DraftPhase::Committed;
                cache.carregar_tudo(gateway).await;
                Ok(ordem)
            }
            Err(e) => {
                log::error!("❌ Error guardando ordem de serviço: {}", e);
                self.fase = DraftPhase::Failed;
                Err(ComposerError::Gateway(
                    e.mensagem_usuario("Erro ao salvar ordem de serviço"),
                ))
            }
        }
    }

    /// Cambiar sólo el status de una orden persistida
    ///
    /// Update angosto (`PUT /ordens_servico/{id}/status`): no toca ningún
    /// otro campo de la orden. En éxito recarga el cache.
    pub async fn alterar_status<G: OficinaGateway + ?Sized>(
        &self,
        gateway: &G,
        cache: &mut ReferenceCache,
        ordem_id: i32,
        status: StatusOrdem,
    ) -> Result<OrdemServico, ComposerError> {
        match gateway.atualizar_status(ordem_id, status).await {
            Ok(ordem) => {
                log::info!("✅ Ordem {} ahora está '{}'", ordem_id, status);
                cache.carregar_tudo(gateway).await;
                Ok(ordem)
            }
            Err(e) => {
                log::error!("❌ Error actualizando status de la ordem {}: {}", ordem_id, e);
                Err(ComposerError::Gateway(
                    e.mensagem_usuario("Erro ao atualizar status"),
                ))
            }
        }
    }
}
