//! Cache de datos de referencia
//!
//! Este módulo contiene el snapshot en memoria de clientes, vehículos,
//! piezas y órdenes de servicio que alimenta los selectores del console y
//! resuelve ids a etiquetas legibles. El cache es un valor explícito que
//! las vistas reciben por referencia; el único contrato de invalidación es
//! "recargar después de cualquier escritura exitosa".

use crate::client::OficinaGateway;
use crate::models::cliente::Cliente;
use crate::models::ordem_servico::OrdemServico;
use crate::models::peca::Peca;
use crate::models::veiculo::Veiculo;

/// Error de carga por recurso de la última `carregar_tudo`
///
/// Un fallo en un recurso no descarta los demás: cada lista conserva su
/// snapshot anterior y el flag correspondiente guarda el mensaje.
#[derive(Debug, Clone, Default)]
pub struct CargaErros {
    pub clientes: Option<String>,
    pub veiculos: Option<String>,
    pub pecas: Option<String>,
    pub ordens: Option<String>,
}

impl CargaErros {
    pub fn algum(&self) -> bool {
        self.clientes.is_some()
            || self.veiculos.is_some()
            || self.pecas.is_some()
            || self.ordens.is_some()
    }
}

/// Snapshot en memoria de los datos de referencia de la oficina
#[derive(Debug, Default)]
pub struct ReferenceCache {
    pub clientes: Vec<Cliente>,
    pub veiculos: Vec<Veiculo>,
    pub pecas: Vec<Peca>,
    pub ordens: Vec<OrdemServico>,
    /// Vehículos del cliente seleccionado en el formulario de órdenes
    pub veiculos_cliente: Vec<Veiculo>,
    pub erros: CargaErros,
    geracao_veiculos_cliente: u64,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cargar las cuatro listas de referencia concurrentemente
    ///
    /// Nunca devuelve error: cada recurso que falla conserva su snapshot
    /// anterior y deja el mensaje en [`CargaErros`] para que la vista lo
    /// muestre.
    pub async fn carregar_tudo<G: OficinaGateway + ?Sized>(&mut self, gateway: &G) {
        log::info!("🔄 Recargando datos de referencia");

        let (clientes, veiculos, pecas, ordens) = futures::join!(
            gateway.listar_clientes(),
            gateway.listar_veiculos(),
            gateway.listar_pecas(),
            gateway.listar_ordens(None),
        );

        self.erros = CargaErros::default();

        match clientes {
            Ok(lista) => self.clientes = lista,
            Err(e) => {
                log::error!("❌ Error cargando clientes: {}", e);
                self.erros.clientes = Some(e.to_string());
            }
        }
        match veiculos {
            Ok(lista) => self.veiculos = lista,
            Err(e) => {
                log::error!("❌ Error cargando vehículos: {}", e);
                self.erros.veiculos = Some(e.to_string());
            }
        }
        match pecas {
            Ok(lista) => self.pecas = lista,
            Err(e) => {
                log::error!("❌ Error cargando piezas: {}", e);
                self.erros.pecas = Some(e.to_string());
            }
        }
        match ordens {
            Ok(lista) => self.ordens = lista,
            Err(e) => {
                log::error!("❌ Error cargando órdenes: {}", e);
                self.erros.ordens = Some(e.to_string());
            }
        }

        log::info!(
            "✅ Referencia cargada: {} clientes, {} vehículos, {} piezas, {} órdenes",
            self.clientes.len(),
            self.veiculos.len(),
            self.pecas.len(),
            self.ordens.len()
        );
    }

    /// Cargar los vehículos del cliente seleccionado
    ///
    /// `None` limpia la lista sin tocar la red. Un fallo de red deja la
    /// lista anterior en su lugar (sólo se loguea, igual que el resto de
    /// cargas de referencia).
    pub async fn carregar_veiculos_cliente<G: OficinaGateway + ?Sized>(
        &mut self,
        gateway: &G,
        cliente_id: Option<i32>,
    ) {
        let geracao = self.nova_geracao();

        let Some(id) = cliente_id else {
            self.veiculos_cliente.clear();
            return;
        };

        match gateway.listar_veiculos_cliente(id).await {
            Ok(lista) => {
                self.aplicar_veiculos_cliente(geracao, lista);
            }
            Err(e) => {
                log::error!("❌ Error cargando vehículos del cliente {}: {}", id, e);
            }
        }
    }

    /// Iniciar una nueva generación de carga de vehículos por cliente
    ///
    /// El token devuelto debe acompañar al resultado en
    /// [`aplicar_veiculos_cliente`]; así una respuesta lenta de una
    /// selección anterior no pisa la lista de la selección vigente.
    pub fn nova_geracao(&mut self) -> u64 {
        self.geracao_veiculos_cliente += 1;
        self.geracao_veiculos_cliente
    }

    /// Aplicar el resultado de una carga de vehículos por cliente
    ///
    /// Devuelve `false` (y descarta la lista) si el token quedó superado
    /// por una selección más reciente.
    pub fn aplicar_veiculos_cliente(&mut self, geracao: u64, veiculos: Vec<Veiculo>) -> bool {
        if geracao != self.geracao_veiculos_cliente {
            log::warn!(
                "⚠️ Descartando respuesta obsoleta de vehículos (generación {} < {})",
                geracao,
                self.geracao_veiculos_cliente
            );
            return false;
        }
        self.veiculos_cliente = veiculos;
        true
    }

    /// Resolver el id de un cliente a su nombre para los listados
    pub fn resolver_nome_cliente(&self, cliente_id: i32) -> String {
        self.clientes
            .iter()
            .find(|c| c.id == cliente_id)
            .map(|c| c.nome.clone())
            .unwrap_or_else(|| "Cliente não encontrado".to_string())
    }

    /// Resolver el id de un vehículo a su placa para los listados
    pub fn resolver_placa_veiculo(&self, veiculo_id: i32) -> String {
        self.veiculos
            .iter()
            .find(|v| v.id == veiculo_id)
            .map(|v| v.placa.clone())
            .unwrap_or_else(|| "Veículo não encontrado".to_string())
    }
}
