//! # route-groups
//!
//! Route groups as self-contained units. Each group owns a path prefix, a
//! route name namespace and the attributes every one of its routes shares:
//! middleware, a domain, parameter patterns.
//!
//! ## The contract
//!
//! A group declares routes. It does not dispatch them. Matching requests,
//! running middleware and building responses belong to whatever router sits
//! behind the [`Registrar`] seam.
//!
//! What a group does own:
//!
//! - **Prefix merge** — [`GroupConfig::prefix`] joins the group prefix and a
//!   path with exactly one `/`
//! - **Name namespace** — [`GroupConfig::name`] turns `"create"` into
//!   `"users.create"`
//! - **Grouping options** — [`GroupConfig::group_options`] carries only the
//!   attributes that are actually set
//! - **Binding** — [`RouteGroup::bind`] opens a scope, registers, closes the
//!   scope, then runs the post-registration hook
//!
//! ## Quick start
//!
//! ```rust
//! use route_groups::{Error, GroupConfig, Registrar, RouteDef, RouteGroup, RouteTable, Routes};
//!
//! struct Users;
//!
//! impl Routes<RouteTable> for Users {
//!     fn config(&self) -> GroupConfig {
//!         GroupConfig::builder()
//!             .prefix("/admin/users/")
//!             .name("users")
//!             .middleware("auth")
//!             .where_param("id", "[0-9]+")
//!             .build()
//!     }
//!
//!     fn register(&self, group: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
//!         router.add_route(RouteDef::get(group.prefix("/")).name(group.name("index")))?;
//!         router.add_route(RouteDef::get(group.prefix("{id}")).name(group.name("show")))
//!     }
//! }
//!
//! let mut table = RouteTable::new();
//! RouteGroup::new(&mut table, Users).bind()?;
//!
//! let show = table.route("users.show").unwrap();
//! assert_eq!(show.path(), "/admin/users/{id}");
//! assert_eq!(show.middleware(), ["auth"]);
//! # Ok::<(), Error>(())
//! ```

mod config;
mod error;
mod group;
mod options;
mod registrar;
mod registry;
mod table;

pub mod path;

pub use config::{GroupConfig, GroupConfigBuilder};
pub use error::Error;
pub use group::{RouteGroup, Routes};
pub use options::{GroupOptions, Middleware};
pub use registrar::{Registrar, RouteDef};
pub use registry::Registry;
pub use table::{Route, RouteTable};

pub use http::Method;
