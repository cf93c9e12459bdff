//! Capa GraphQL
//!
//! Declaración del schema consumido por `async-graphql`.

pub mod schema;

pub use schema::{build_schema, RouteSchema};
