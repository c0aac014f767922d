//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de los campos de texto del formulario.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use validator::ValidationError;

/// Validar y convertir string a fecha en formato `YYYY-MM-DD`
pub fn validar_data(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("data");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Convertir el campo de texto del valor de mano de obra a Decimal
///
/// Campo vacío equivale a 0 (el formulario permite dejarlo en blanco).
/// Acepta coma o punto como separador decimal; rechaza valores negativos
/// o no numéricos.
pub fn parse_valor_mao_obra(texto: &str) -> Result<Decimal, ValidationError> {
    let texto = texto.trim();
    if texto.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let normalizado = texto.replace(',', ".");
    let valor = Decimal::from_str(&normalizado).map_err(|_| {
        let mut error = ValidationError::new("valor_mao_obra");
        error.add_param("value".into(), &texto.to_string());
        error
    })?;

    if valor.is_sign_negative() {
        let mut error = ValidationError::new("valor_mao_obra");
        error.add_param("value".into(), &texto.to_string());
        return Err(error);
    }

    Ok(valor)
}

/// Validar que un precio no sea negativo (usado por los derives de `validator`)
pub fn validar_preco(valor: &Decimal) -> Result<(), ValidationError> {
    if valor.is_sign_negative() {
        let mut error = ValidationError::new("preco");
        error.add_param("value".into(), &valor.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validar_data() {
        assert_eq!(
            validar_data("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(validar_data("15/03/2025").is_err());
        assert!(validar_data("").is_err());
    }

    #[test]
    fn test_parse_valor_mao_obra() {
        assert_eq!(parse_valor_mao_obra("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_valor_mao_obra("   ").unwrap(), Decimal::ZERO);
        assert_eq!(
            parse_valor_mao_obra("150.00").unwrap(),
            Decimal::new(15000, 2)
        );
        // separador decimal brasileño
        assert_eq!(
            parse_valor_mao_obra("150,50").unwrap(),
            Decimal::new(15050, 2)
        );
        assert!(parse_valor_mao_obra("-10").is_err());
        assert!(parse_valor_mao_obra("abc").is_err());
    }

    #[test]
    fn test_validar_preco() {
        assert!(validar_preco(&Decimal::ZERO).is_ok());
        assert!(validar_preco(&Decimal::new(1000, 2)).is_ok());
        assert!(validar_preco(&Decimal::new(-1, 0)).is_err());
    }
}
