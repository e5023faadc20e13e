//! Repository implementations for database access
//!
//! One repository per entity, each borrowing the shared pool and issuing
//! a single parameterized statement per call.

pub mod clientes;
pub mod paises;
pub mod paquetes;

pub use clientes::{Cliente, ClienteRepo};
pub use paises::{Pais, PaisRepo};
pub use paquetes::PaqueteRepo;
