//! Route handlers, one module per resource.

pub mod clientes;
pub mod health;
pub mod paises;
pub mod paquetes;
