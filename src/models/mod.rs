//! Modelos del sistema
//! 
//! Este módulo contiene los tipos de datos expuestos por el schema GraphQL.

pub mod route;
