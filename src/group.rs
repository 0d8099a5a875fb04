//! Self-contained route groups.
//!
//! An application describes a group by implementing [`Routes`]: the group's
//! [`GroupConfig`] and the routes it declares. A [`RouteGroup`] pairs that
//! description with the registrar it was given at construction and drives
//! the bind lifecycle:
//!
//! ```text
//! RouteGroup::new(router, routes)            constructed, handle captured
//!        ↓ bind()
//! router.group(options, |r| register(r))     scope open, routes declared
//!        ↓ scope closed
//! after_register(router)                     finalized, group consumed
//! ```
//!
//! `bind` takes `self`, so a finalized group cannot be bound a second time.

use tracing::{debug, warn};

use crate::config::GroupConfig;
use crate::error::Error;
use crate::options::GroupOptions;
use crate::registrar::Registrar;

/// The routes of one group.
///
/// `register` is required. `config` defaults to a root group with no name
/// and no attributes; `after_register` defaults to doing nothing.
pub trait Routes<R: Registrar> {
    fn config(&self) -> GroupConfig {
        GroupConfig::default()
    }

    /// Declares the group's routes and sub-groups on `router`.
    ///
    /// Runs inside the group scope: everything added here carries the
    /// group's options. Use `group.prefix(..)` and `group.name(..)` to place
    /// paths and names under the group.
    fn register(&self, group: &GroupConfig, router: &mut R) -> Result<(), Error>;

    /// Runs once the group scope has closed and every route declared by
    /// [`register`](Routes::register) is in the router.
    ///
    /// Not called when `register` fails.
    fn after_register(&self, _group: &GroupConfig, _router: &mut R) -> Result<(), Error> {
        Ok(())
    }
}

impl<R: Registrar, T: Routes<R> + ?Sized> Routes<R> for &T {
    fn config(&self) -> GroupConfig {
        (**self).config()
    }

    fn register(&self, group: &GroupConfig, router: &mut R) -> Result<(), Error> {
        (**self).register(group, router)
    }

    fn after_register(&self, group: &GroupConfig, router: &mut R) -> Result<(), Error> {
        (**self).after_register(group, router)
    }
}

impl<R: Registrar, T: Routes<R> + ?Sized> Routes<R> for Box<T> {
    fn config(&self) -> GroupConfig {
        (**self).config()
    }

    fn register(&self, group: &GroupConfig, router: &mut R) -> Result<(), Error> {
        (**self).register(group, router)
    }

    fn after_register(&self, group: &GroupConfig, router: &mut R) -> Result<(), Error> {
        (**self).after_register(group, router)
    }
}

/// A group ready to be bound into a registrar.
///
/// Holds the registrar exclusively from construction until [`bind`](Self::bind)
/// returns. The configuration is read once, in [`new`](Self::new), and never
/// changes afterwards.
pub struct RouteGroup<'r, R, G> {
    router: &'r mut R,
    config: GroupConfig,
    routes: G,
}

impl<'r, R: Registrar, G: Routes<R>> RouteGroup<'r, R, G> {
    pub fn new(router: &'r mut R, routes: G) -> Self {
        let config = routes.config();
        Self { router, config, routes }
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// See [`GroupConfig::prefix`].
    pub fn prefix(&self, path: &str) -> String {
        self.config.prefix(path)
    }

    /// See [`GroupConfig::name`].
    pub fn name(&self, suffix: &str) -> String {
        self.config.name(suffix)
    }

    /// See [`GroupConfig::group_options`].
    pub fn group_options(&self) -> GroupOptions {
        self.config.group_options()
    }

    /// Registers the group with its registrar.
    ///
    /// Opens a scope with [`group_options`](Self::group_options), runs
    /// [`Routes::register`] inside it, then runs [`Routes::after_register`]
    /// once the scope has closed. A failing `register` is returned as is and
    /// `after_register` is skipped.
    pub fn bind(self) -> Result<(), Error> {
        let Self { router, config, routes } = self;
        let options = config.group_options();
        let keys: Vec<_> = options.keys().collect();

        debug!(name = config.base_name(), prefix = config.raw_prefix(), options = ?keys, "binding route group");

        if let Err(e) = router.group(&options, |router| routes.register(&config, router)) {
            warn!(name = config.base_name(), "route group registration failed: {e}");
            return Err(e);
        }

        routes.after_register(&config, router)
    }
}
