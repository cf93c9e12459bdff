//! Schema GraphQL
//!
//! Raíces `Query` y `Mutation`. Cada campo delega en [`RouteService`].

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Result, Schema};

use crate::models::route::{Route, RouteInput};
use crate::services::route_service::RouteService;

pub type RouteSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Construir el schema con el servicio de rutas como dato compartido
pub fn build_schema(service: RouteService) -> RouteSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// The root GraphQL query type.
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Rutas recomendadas: las dos primeras del store.
    async fn recommend_routes(&self, ctx: &Context<'_>) -> Option<Vec<Option<Route>>> {
        let routes = ctx.data_unchecked::<RouteService>().recommend_routes().await;
        Some(routes.into_iter().map(Some).collect())
    }

    /// Rutas populares: desde la cuarta posición del store.
    async fn popular_routes(&self, ctx: &Context<'_>) -> Option<Vec<Option<Route>>> {
        let routes = ctx.data_unchecked::<RouteService>().popular_routes().await;
        Some(routes.into_iter().map(Some).collect())
    }

    /// Ruta por id, o `null` si no existe.
    async fn route(&self, ctx: &Context<'_>, id: i32) -> Option<Route> {
        ctx.data_unchecked::<RouteService>().route(id).await
    }
}

/// The root GraphQL mutation type.
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Crear una ruta; el id siempre lo asigna el servidor.
    async fn create_route(
        &self,
        ctx: &Context<'_>,
        route: Option<RouteInput>,
    ) -> Result<Option<Route>> {
        let service = ctx.data_unchecked::<RouteService>();
        service
            .create_route(route.unwrap_or_default())
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }

    /// Merge superficial del input sobre la ruta existente.
    async fn update_route(
        &self,
        ctx: &Context<'_>,
        id: i32,
        route: Option<RouteInput>,
    ) -> Result<Option<Route>> {
        let service = ctx.data_unchecked::<RouteService>();
        service
            .update_route(id, route.unwrap_or_default())
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }

    /// Eliminar una ruta y devolverla tal como estaba.
    async fn delete_route(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Route>> {
        let service = ctx.data_unchecked::<RouteService>();
        service
            .delete_route(id)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_matches_public_contract() {
        let sdl = build_schema(RouteService::default()).sdl();

        for expected in [
            "recommendRoutes: [Route]",
            "popularRoutes: [Route]",
            "route(id: Int!): Route",
            "createRoute(route: RouteInput): Route",
            "updateRoute(id: Int!, route: RouteInput): Route",
            "deleteRoute(id: Int!): Route",
            "cost_est: String",
            "imageUrl: String",
            "center: LocationInput",
            "visits: [VisitInput]",
            "visits: [Visit]",
            "position: Location\n",
            "center: Location\n",
            "position: LocationInput\n",
            "id: String!",
            "type Query",
            "type Mutation",
        ] {
            assert!(sdl.contains(expected), "missing `{}` in SDL:\n{}", expected, sdl);
        }
        assert!(!sdl.contains("costEst"));
    }
}
