//! Modelo de Route
//!
//! Este módulo contiene el struct Route (itinerario de viaje), sus paradas
//! (`Visit`) y el input usado por las mutaciones GraphQL.
//! Los nombres de campos del schema son parte del contrato público:
//! `cost_est` se expone tal cual, el resto en camelCase (`imageUrl`).

use async_graphql::{InputObject, MaybeUndefined, SimpleObject};
use serde::{Deserialize, Serialize};

/// Punto geográfico
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, SimpleObject, InputObject)]
#[graphql(input_name = "LocationInput")]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Parada dentro del itinerario de una ruta.
///
/// El `id` lo elige el cliente y no se valida su unicidad.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, SimpleObject, InputObject)]
#[graphql(input_name = "VisitInput")]
pub struct Visit {
    pub id: String,
    pub seq: Option<i32>,
    pub commute: Option<String>,
    pub date: Option<String>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub title: Option<String>,
    pub info: Option<String>,
    pub url: Option<String>,
    pub position: Option<Location>,
}

/// Route principal - el único registro almacenado
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i32,
    pub title: Option<String>,
    pub info: Option<String>,
    pub traveller: Option<String>,
    pub duration: Option<String>,
    #[graphql(name = "cost_est")]
    #[serde(rename = "cost_est")]
    pub cost_est: Option<String>,
    pub copied: Option<i32>,
    pub image_url: Option<String>,
    pub center: Option<Location>,
    pub visits: Option<Vec<Option<Visit>>>,
}

/// Input de las mutaciones `createRoute` y `updateRoute`.
///
/// Cada campo distingue entre ausente (`Undefined`) y `null` explícito para
/// poder aplicar el merge superficial de `updateRoute`. El `id` se acepta
/// pero nunca se aplica.
#[derive(Debug, Clone, Default, InputObject)]
pub struct RouteInput {
    pub id: Option<i32>,
    pub title: MaybeUndefined<String>,
    pub info: MaybeUndefined<String>,
    pub traveller: MaybeUndefined<String>,
    pub duration: MaybeUndefined<String>,
    #[graphql(name = "cost_est")]
    pub cost_est: MaybeUndefined<String>,
    pub copied: MaybeUndefined<i32>,
    pub image_url: MaybeUndefined<String>,
    pub center: MaybeUndefined<Location>,
    pub visits: MaybeUndefined<Vec<Option<Visit>>>,
}

impl Route {
    /// Construir una ruta nueva con el id asignado por el store
    pub fn from_input(id: i32, input: RouteInput) -> Self {
        let mut route = Route {
            id,
            ..Default::default()
        };
        route.merge(input);
        route
    }

    /// Merge superficial campo por campo: los campos presentes en el input
    /// sobrescriben (un `null` explícito limpia el campo), los ausentes se
    /// conservan. `center` y `visits` se reemplazan completos.
    pub fn merge(&mut self, input: RouteInput) {
        merge_field(&mut self.title, input.title);
        merge_field(&mut self.info, input.info);
        merge_field(&mut self.traveller, input.traveller);
        merge_field(&mut self.duration, input.duration);
        merge_field(&mut self.cost_est, input.cost_est);
        merge_field(&mut self.copied, input.copied);
        merge_field(&mut self.image_url, input.image_url);
        merge_field(&mut self.center, input.center);
        merge_field(&mut self.visits, input.visits);
    }
}

fn merge_field<T>(target: &mut Option<T>, patch: MaybeUndefined<T>) {
    match patch {
        MaybeUndefined::Undefined => {}
        MaybeUndefined::Null => *target = None,
        MaybeUndefined::Value(value) => *target = Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_route() -> Route {
        Route {
            id: 3,
            title: Some("Kyoto".to_string()),
            info: Some("Temples".to_string()),
            center: Some(Location {
                lat: Some(35.0),
                lng: Some(135.7),
            }),
            visits: Some(vec![Some(Visit {
                id: "v1".to_string(),
                seq: Some(1),
                ..Default::default()
            })]),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_input_ignores_supplied_id() {
        let input = RouteInput {
            id: Some(99),
            title: MaybeUndefined::Value("A".to_string()),
            ..Default::default()
        };

        let route = Route::from_input(1, input);
        assert_eq!(route.id, 1);
        assert_eq!(route.title.as_deref(), Some("A"));
        assert!(route.info.is_none());
        assert!(route.visits.is_none());
    }

    #[test]
    fn test_merge_only_touches_present_fields() {
        let mut route = stored_route();
        route.merge(RouteInput {
            title: MaybeUndefined::Value("Osaka".to_string()),
            ..Default::default()
        });

        let mut expected = stored_route();
        expected.title = Some("Osaka".to_string());
        assert_eq!(route, expected);
    }

    #[test]
    fn test_merge_explicit_null_clears_field() {
        let mut route = stored_route();
        route.merge(RouteInput {
            info: MaybeUndefined::Null,
            center: MaybeUndefined::Null,
            ..Default::default()
        });

        assert!(route.info.is_none());
        assert!(route.center.is_none());
        assert_eq!(route.title.as_deref(), Some("Kyoto"));
    }

    #[test]
    fn test_merge_replaces_nested_values_wholesale() {
        let mut route = stored_route();
        route.merge(RouteInput {
            center: MaybeUndefined::Value(Location {
                lat: Some(1.0),
                lng: None,
            }),
            visits: MaybeUndefined::Value(vec![]),
            ..Default::default()
        });

        assert_eq!(
            route.center,
            Some(Location {
                lat: Some(1.0),
                lng: None
            })
        );
        assert_eq!(route.visits, Some(vec![]));
    }

    #[test]
    fn test_merge_never_changes_id() {
        let mut route = stored_route();
        route.merge(RouteInput {
            id: Some(500),
            ..Default::default()
        });
        assert_eq!(route.id, 3);
    }

    #[test]
    fn test_route_json_uses_wire_field_names() {
        let json = serde_json::to_value(stored_route()).unwrap();
        assert!(json.get("cost_est").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
    }
}
