//! In-memory route table.
//!
//! Records every route with the attributes it inherited from the group
//! scopes it was declared in. Paths go through one radix tree per
//! (domain, method) pair, so malformed paths and conflicting routes are
//! rejected at registration time, not at first request.

use std::collections::{BTreeMap, HashMap};
use std::ops::{Deref, DerefMut};

use http::Method;
use matchit::Router as MatchitRouter;
use tracing::trace;

use crate::error::Error;
use crate::options::GroupOptions;
use crate::path;
use crate::registrar::{Registrar, RouteDef};

/// A registered route and everything it inherited from its groups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route {
    method: Method,
    path: String,
    name: Option<String>,
    middleware: Vec<String>,
    domain: Option<String>,
    regex: BTreeMap<String, String>,
}

impl Route {
    pub fn method(&self) -> &Method { &self.method }
    /// Always starts with `/`.
    pub fn path(&self) -> &str { &self.path }
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    /// Outermost group first.
    pub fn middleware(&self) -> &[String] { &self.middleware }
    pub fn domain(&self) -> Option<&str> { self.domain.as_deref() }
    pub fn regex(&self) -> &BTreeMap<String, String> { &self.regex }
}

/// A [`Registrar`] that keeps routes in memory.
///
/// Nested scopes compose: middleware lists are appended outer to inner, the
/// innermost domain wins, and regex constraints merge with inner keys
/// overriding outer ones.
///
/// ```rust
/// use route_groups::{Registrar, RouteDef, RouteTable};
///
/// let mut table = RouteTable::new();
/// table.add_route(RouteDef::get("/users/{id}").name("users.show")).unwrap();
///
/// assert_eq!(table.route("users.show").unwrap().path(), "/users/{id}");
/// ```
#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    trees: HashMap<(Option<String>, Method), MatchitRouter<usize>>,
    names: HashMap<String, usize>,
    scopes: Vec<GroupOptions>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Looks a route up by name.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.names.get(name).map(|&i| &self.routes[i])
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of group scopes currently open.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    fn inherited(&self) -> Inherited {
        let mut inherited = Inherited::default();
        for scope in &self.scopes {
            if let Some(middleware) = scope.middleware() {
                inherited.middleware.extend(middleware.names().map(str::to_owned));
            }
            if let Some(domain) = scope.domain() {
                inherited.domain = Some(domain.to_owned());
            }
            if let Some(regex) = scope.regex() {
                inherited.regex.extend(regex.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        inherited
    }
}

/// An open group scope. Dropping it closes the scope, also while unwinding.
struct Scope<'a> {
    table: &'a mut RouteTable,
}

impl<'a> Scope<'a> {
    fn open(table: &'a mut RouteTable, options: &GroupOptions) -> Self {
        table.scopes.push(options.clone());
        Self { table }
    }
}

impl Deref for Scope<'_> {
    type Target = RouteTable;

    fn deref(&self) -> &RouteTable {
        self.table
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut RouteTable {
        self.table
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.table.scopes.pop();
    }
}

#[derive(Default)]
struct Inherited {
    middleware: Vec<String>,
    domain: Option<String>,
    regex: BTreeMap<String, String>,
}

// ── Registrar ────────────────────────────────────────────────────────────────

impl Registrar for RouteTable {
    fn group<F>(&mut self, options: &GroupOptions, routes: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>,
    {
        let mut scope = Scope::open(self, options);
        routes(&mut *scope)
    }

    fn add_route(&mut self, def: RouteDef) -> Result<(), Error> {
        let RouteDef { method, path, name } = def;
        let path = match path::normalize(&path) {
            "" => path::ROOT.to_owned(),
            p => format!("/{p}"),
        };

        if let Some(name) = &name {
            if self.names.contains_key(name) {
                return Err(Error::DuplicateName(name.clone()));
            }
        }

        let Inherited { middleware, domain, regex } = self.inherited();
        let index = self.routes.len();

        self.trees
            .entry((domain.clone(), method.clone()))
            .or_default()
            .insert(path.as_str(), index)
            .map_err(|source| Error::InvalidRoute { path: path.clone(), source })?;

        if let Some(name) = &name {
            self.names.insert(name.clone(), index);
        }

        trace!(%method, path = %path, name = name.as_deref(), domain = domain.as_deref(), "route registered");

        self.routes.push(Route { method, path, name, middleware, domain, regex });
        Ok(())
    }
}
