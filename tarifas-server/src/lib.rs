//! tarifas-server: HTTP API over the tarifas relational store
//!
//! A thin JSON layer between five routes and parameterized SQL: reference
//! data lookups (clientes, paises) and package creation (paquetes). Each
//! request runs one statement against a lazily-opened shared pool.

pub mod db;
pub mod http;
pub mod models;
