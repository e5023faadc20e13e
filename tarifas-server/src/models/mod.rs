//! Wire schemas and validated domain forms.

pub mod fixed;
pub mod paquete;
pub mod validation;

pub use fixed::{Dimension, Fixed, Importe, Peso};
pub use paquete::{CrearPaqueteRequest, NuevoPaquete};
pub use validation::ValidationError;
