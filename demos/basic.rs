//! Minimal route-groups example — an admin area with a nested group and a
//! public API, bound into an in-memory table and printed.
//!
//! Run with:
//!   RUST_LOG=route_groups=trace cargo run --example basic

use route_groups::{Error, GroupConfig, Registrar, Registry, RouteDef, RouteGroup, RouteTable, Routes};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut table = RouteTable::new();

    Registry::new()
        .with(Admin)
        .with(Api)
        .bind(&mut table)?;

    for route in table.routes() {
        println!(
            "{:<6} {:<28} {:<24} [{}]",
            route.method().as_str(),
            route.path(),
            route.name().unwrap_or("-"),
            route.middleware().join(", "),
        );
    }

    Ok(())
}

// /admin/* — session auth, admin host only
struct Admin;

impl Routes<RouteTable> for Admin {
    fn config(&self) -> GroupConfig {
        GroupConfig::builder()
            .prefix("/admin")
            .name("admin")
            .middleware(["web", "auth"])
            .domain("admin.example.com")
            .build()
    }

    fn register(&self, group: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
        router.add_route(RouteDef::get(group.prefix("/")).name(group.name("home")))?;

        // Child groups bound here run inside this scope and inherit it.
        RouteGroup::new(router, AdminUsers).bind()
    }

    fn after_register(&self, group: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
        // Every admin route is in place by now.
        let count = router.routes().iter().filter(|r| r.domain() == Some("admin.example.com")).count();
        tracing::info!(group = group.base_name(), routes = count, "admin area ready");
        Ok(())
    }
}

struct AdminUsers;

impl Routes<RouteTable> for AdminUsers {
    fn config(&self) -> GroupConfig {
        GroupConfig::builder()
            .prefix("admin/users/")
            .name("admin.users")
            .where_param("user", "[0-9]+")
            .build()
    }

    fn register(&self, group: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
        router.add_route(RouteDef::get(group.prefix("/")).name(group.name("index")))?;
        router.add_route(RouteDef::get(group.prefix("{user}")).name(group.name("show")))?;
        router.add_route(RouteDef::delete(group.prefix("{user}")).name(group.name("destroy")))
    }
}

// /api/v1/* — token auth, any host
struct Api;

impl Routes<RouteTable> for Api {
    fn config(&self) -> GroupConfig {
        GroupConfig::builder()
            .prefix("/api/v1/")
            .name("api")
            .middleware("auth:token")
            .build()
    }

    fn register(&self, group: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
        router.add_route(RouteDef::get(group.prefix("posts")).name(group.name("posts.index")))?;
        router.add_route(RouteDef::post(group.prefix("posts")).name(group.name("posts.store")))
    }
}
