//! Package creation input
//!
//! Two layers: the raw wire shape with every field optional, and the
//! validated form the repository binds into the insert statement.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::{Dimension, Fixed, Importe, Peso, ValidationError};

/// Raw request body for POST /paquetes.
///
/// Fields stay optional at the wire level so absent and null inputs get a
/// field-level 400 instead of a deserializer rejection. Unknown keys are
/// rejected outright.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrearPaqueteRequest {
    pub peso: Option<Decimal>,
    pub ancho: Option<Decimal>,
    pub alto: Option<Decimal>,
    pub largo: Option<Decimal>,
    pub id_pais_origen: Option<i32>,
    pub id_pais_destino: Option<i32>,
    pub id_cliente: Option<i32>,
    pub total: Option<Decimal>,
}

/// Validated package, ready to insert.
#[derive(Debug, Clone)]
pub struct NuevoPaquete {
    pub peso: Peso,
    pub ancho: Dimension,
    pub alto: Dimension,
    pub largo: Dimension,
    pub id_pais_origen: i32,
    pub id_pais_destino: i32,
    /// Binds as SQL NULL when absent, never zero.
    pub id_cliente: Option<i32>,
    /// Caller-supplied; this service does not compute it.
    pub total: Importe,
}

impl NuevoPaquete {
    /// Validate the raw body before any store access.
    ///
    /// Required: peso, ancho, alto, largo, id_pais_origen,
    /// id_pais_destino. `total` defaults to zero.
    pub fn from_request(req: CrearPaqueteRequest) -> Result<Self, ValidationError> {
        let peso = req.peso.ok_or(ValidationError::Missing { field: "peso" })?;
        let ancho = req.ancho.ok_or(ValidationError::Missing { field: "ancho" })?;
        let alto = req.alto.ok_or(ValidationError::Missing { field: "alto" })?;
        let largo = req.largo.ok_or(ValidationError::Missing { field: "largo" })?;
        let id_pais_origen = req
            .id_pais_origen
            .ok_or(ValidationError::Missing { field: "id_pais_origen" })?;
        let id_pais_destino = req
            .id_pais_destino
            .ok_or(ValidationError::Missing { field: "id_pais_destino" })?;

        Ok(Self {
            peso: Fixed::new("peso", peso)?,
            ancho: Fixed::new("ancho", ancho)?,
            alto: Fixed::new("alto", alto)?,
            largo: Fixed::new("largo", largo)?,
            id_pais_origen,
            id_pais_destino,
            id_cliente: req.id_cliente,
            total: Fixed::new("total", req.total.unwrap_or(Decimal::ZERO))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    fn full_request() -> CrearPaqueteRequest {
        CrearPaqueteRequest {
            peso: Some(dec("2.500")),
            ancho: Some(dec("30")),
            alto: Some(dec("20")),
            largo: Some(dec("40")),
            id_pais_origen: Some(1),
            id_pais_destino: Some(2),
            id_cliente: Some(7),
            total: Some(dec("125.50")),
        }
    }

    #[test]
    fn accepts_full_request() {
        let paquete = NuevoPaquete::from_request(full_request()).unwrap();
        assert_eq!(paquete.peso.into_inner(), dec("2.500"));
        assert_eq!(paquete.id_cliente, Some(7));
        assert_eq!(paquete.total.into_inner(), dec("125.50"));
    }

    #[test]
    fn each_required_field_is_checked() {
        let cases: [(&'static str, fn(&mut CrearPaqueteRequest)); 6] = [
            ("peso", |r| r.peso = None),
            ("ancho", |r| r.ancho = None),
            ("alto", |r| r.alto = None),
            ("largo", |r| r.largo = None),
            ("id_pais_origen", |r| r.id_pais_origen = None),
            ("id_pais_destino", |r| r.id_pais_destino = None),
        ];

        for (field, clear) in cases {
            let mut req = full_request();
            clear(&mut req);
            let err = NuevoPaquete::from_request(req).unwrap_err();
            assert_eq!(err, ValidationError::Missing { field });
        }
    }

    #[test]
    fn cliente_and_total_are_optional() {
        let mut req = full_request();
        req.id_cliente = None;
        req.total = None;

        let paquete = NuevoPaquete::from_request(req).unwrap();
        assert_eq!(paquete.id_cliente, None);
        assert_eq!(paquete.total.into_inner(), Decimal::ZERO);
    }

    #[test]
    fn dimensions_rescale_to_two_digits() {
        let mut req = full_request();
        req.ancho = Some(dec("30.555"));

        let paquete = NuevoPaquete::from_request(req).unwrap();
        assert_eq!(paquete.ancho.into_inner(), dec("30.56"));
    }

    #[test]
    fn null_fields_deserialize_as_absent() {
        let req: CrearPaqueteRequest =
            serde_json::from_str(r#"{"peso": null, "ancho": 30}"#).unwrap();
        assert!(req.peso.is_none());
        assert!(req.ancho.is_some());

        let err = NuevoPaquete::from_request(req).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "peso" });
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<CrearPaqueteRequest, _> =
            serde_json::from_str(r#"{"peso": 1.0, "color": "rojo"}"#);
        assert!(result.is_err());
    }
}
