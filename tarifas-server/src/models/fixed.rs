//! Fixed-precision decimal wrapper
//!
//! The package columns are NUMERIC(p, s); values must be rescaled before
//! binding so the statement carries exactly what the column stores.

use rust_decimal::{Decimal, RoundingStrategy};

use super::ValidationError;

/// Decimal constrained to a column's NUMERIC(P, S) type.
///
/// Construction rescales to `S` fractional digits and rejects values
/// whose integral part needs more than `P - S` digits, mirroring what
/// the store would enforce on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed<const P: u32, const S: u32>(Decimal);

/// Column type of `detalle_paquete.peso`: NUMERIC(10, 3).
pub type Peso = Fixed<10, 3>;

/// Column type of the package dimensions: NUMERIC(10, 2).
pub type Dimension = Fixed<10, 2>;

/// Column type of `detalle_paquete.total`: NUMERIC(12, 2).
pub type Importe = Fixed<12, 2>;

impl<const P: u32, const S: u32> Fixed<P, S> {
    /// Rescale `value` to the column's scale, rejecting integral overflow.
    ///
    /// `field` names the offending request field in the error.
    pub fn new(field: &'static str, value: Decimal) -> Result<Self, ValidationError> {
        let scaled = value.round_dp_with_strategy(S, RoundingStrategy::MidpointAwayFromZero);
        if scaled.abs() >= Self::integral_limit() {
            return Err(ValidationError::OutOfRange { field });
        }
        Ok(Self(scaled))
    }

    /// The bound value, ready for a `$n` placeholder.
    pub fn into_inner(self) -> Decimal {
        self.0
    }

    fn integral_limit() -> Decimal {
        Decimal::from(10u64.pow(P - S))
    }
}
