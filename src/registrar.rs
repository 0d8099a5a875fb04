//! The router-registrar seam.
//!
//! Route groups do not route requests. They hand their options and routes to
//! a [`Registrar`], which owns whatever the application actually dispatches
//! with. [`RouteTable`](crate::RouteTable) is the in-crate implementation.

use http::Method;

use crate::error::Error;
use crate::options::GroupOptions;

/// A single route declaration: method, path and optional route name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteDef {
    pub method: Method,
    pub path: String,
    pub name: Option<String>,
}

impl RouteDef {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), name: None }
    }

    pub fn get(path: impl Into<String>) -> Self { Self::new(Method::GET, path) }
    pub fn post(path: impl Into<String>) -> Self { Self::new(Method::POST, path) }
    pub fn put(path: impl Into<String>) -> Self { Self::new(Method::PUT, path) }
    pub fn patch(path: impl Into<String>) -> Self { Self::new(Method::PATCH, path) }
    pub fn delete(path: impl Into<String>) -> Self { Self::new(Method::DELETE, path) }

    /// Names the route. Returns `self` for chaining.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Receives route groups and the routes declared inside them.
///
/// Implementations decide what "inherit the group's attributes" means for
/// their router. The one hard rule is on [`group`](Registrar::group): the
/// scope it opens must be closed again before it returns, whether `routes`
/// succeeded or not.
pub trait Registrar: Sized {
    /// Runs `routes` inside a scope carrying `options`.
    ///
    /// Routes added while `routes` runs, including those of nested groups,
    /// belong to the scope. The result of `routes` is returned unchanged.
    /// The scope is closed on every exit path, unwinding included.
    fn group<F>(&mut self, options: &GroupOptions, routes: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>;

    /// Adds one route in the current scope.
    fn add_route(&mut self, route: RouteDef) -> Result<(), Error>;
}
