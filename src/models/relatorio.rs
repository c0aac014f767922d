//! Modelos de Relatórios
//!
//! Este módulo contiene las respuestas tipadas de los endpoints de
//! `/relatorios` (faturamento mensal, piezas más usadas, servicios más
//! realizados y dashboard).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::ordem_servico::OrdemServico;

/// Respuesta de `GET /relatorios/faturamento_mensal`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaturamentoMensal {
    pub ano: i32,
    pub mes: u32,
    pub total_faturamento: Decimal,
    pub total_ordens: i64,
    /// Día del mes (como string, tal como serializa el backend) → resumen
    pub faturamento_diario: HashMap<String, FaturamentoDia>,
    pub ordens_detalhadas: Vec<OrdemServico>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaturamentoDia {
    pub valor: Decimal,
    pub ordens: i64,
}

/// Respuesta de `GET /relatorios/pecas_mais_usadas`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PecasMaisUsadas {
    pub periodo_dias: i64,
    pub data_inicio: NaiveDate,
    pub pecas_mais_usadas: Vec<PecaUso>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PecaUso {
    pub nome: String,
    pub total_quantidade: i64,
    pub total_valor: Decimal,
    pub total_usos: i64,
}

/// Respuesta de `GET /relatorios/servicos_mais_realizados`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicosMaisRealizados {
    pub periodo_dias: i64,
    pub data_inicio: NaiveDate,
    pub total_ordens_periodo: i64,
    pub servicos_mais_realizados: Vec<ServicoRealizado>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicoRealizado {
    pub nome: String,
    pub quantidade: i64,
    pub valor_total: Decimal,
}

/// Respuesta de `GET /relatorios/dashboard`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResumo {
    pub estatisticas_gerais: EstatisticasGerais,
    pub faturamento_mes_atual: FaturamentoMesAtual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstatisticasGerais {
    pub total_clientes_ativos: i64,
    pub total_veiculos_ativos: i64,
    pub ordens_em_andamento: i64,
    pub ordens_prontas: i64,
    pub ordens_entregues: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaturamentoMesAtual {
    pub mes: u32,
    pub ano: i32,
    pub valor_total: Decimal,
    pub total_ordens: i64,
}
