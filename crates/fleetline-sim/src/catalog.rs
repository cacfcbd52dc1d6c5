//! The route catalog: a read-only table of named routes.
//!
//! The catalog is populated once at startup from the built-in fleet
//! definition and exposes no mutation operations afterwards. A failed
//! lookup against a constructed catalog indicates a configuration defect
//! (a dangling route reference), never a request-time condition -- engine
//! construction validates every reference up front.

use std::collections::BTreeMap;

use fleetline_types::{RouteId, RoutePath};

use crate::error::SimError;
use crate::route::Route;

/// Immutable table of routes indexed by their identifier.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    /// All routes keyed by id.
    routes: BTreeMap<RouteId, Route>,
    /// Route ids in definition order, for stable listings.
    order: Vec<RouteId>,
}

impl RouteCatalog {
    /// Build a catalog from a list of validated routes.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DuplicateRoute`] if two routes share an id.
    pub fn new(routes: Vec<Route>) -> Result<Self, SimError> {
        let mut table = BTreeMap::new();
        let mut order = Vec::with_capacity(routes.len());
        for route in routes {
            let id = route.id().clone();
            if table.contains_key(&id) {
                return Err(SimError::DuplicateRoute(id));
            }
            order.push(id.clone());
            table.insert(id, route);
        }
        Ok(Self {
            routes: table,
            order,
        })
    }

    /// Look up a route by id.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RouteNotFound`] if the id is absent. Against the
    /// built-in catalog this never happens; it indicates a programming or
    /// configuration defect, not a request-time failure.
    pub fn lookup(&self, id: &RouteId) -> Result<&Route, SimError> {
        self.routes
            .get(id)
            .ok_or_else(|| SimError::RouteNotFound(id.clone()))
    }

    /// Number of routes in the catalog.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Read-only metadata for every route, in definition order.
    pub fn paths(&self) -> Vec<RoutePath> {
        self.order
            .iter()
            .filter_map(|id| self.routes.get(id))
            .map(Route::path)
            .collect()
    }
}
