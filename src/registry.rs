//! Startup list of route groups.
//!
//! Applications usually keep their groups in one place and bind them all
//! during startup. [`Registry`] is that place.
//!
//! ```rust
//! use route_groups::{Error, GroupConfig, Registrar, Registry, RouteDef, RouteTable, Routes};
//!
//! struct Health;
//!
//! impl Routes<RouteTable> for Health {
//!     fn register(&self, group: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
//!         router.add_route(RouteDef::get(group.prefix("/healthz")).name(group.name("health")))
//!     }
//! }
//!
//! let mut table = RouteTable::new();
//! Registry::new().with(Health).bind(&mut table).unwrap();
//! assert!(table.route("health").is_some());
//! ```

use tracing::info;

use crate::error::Error;
use crate::group::{RouteGroup, Routes};
use crate::registrar::Registrar;

/// Route groups bound together, in the order they were added.
pub struct Registry<R: Registrar> {
    groups: Vec<Box<dyn Routes<R>>>,
}

impl<R: Registrar> Registry<R> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Adds a group. Returns `self` for chaining.
    pub fn with(mut self, group: impl Routes<R> + 'static) -> Self {
        self.push(group);
        self
    }

    pub fn push(&mut self, group: impl Routes<R> + 'static) {
        self.groups.push(Box::new(group));
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Binds every group into `router`, stopping at the first failure.
    pub fn bind(&self, router: &mut R) -> Result<(), Error> {
        for group in &self.groups {
            RouteGroup::new(&mut *router, group.as_ref()).bind()?;
        }
        info!(groups = self.groups.len(), "route groups bound");
        Ok(())
    }
}

impl<R: Registrar> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}
