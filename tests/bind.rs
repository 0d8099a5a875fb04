//! Bind lifecycle, observed through a registrar that records every call.

use std::cell::RefCell;

use route_groups::{
    Error, GroupConfig, GroupOptions, Middleware, Registrar, RouteDef, RouteGroup, RouteTable, Routes,
};

// ── Recording registrar ──────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
enum Event {
    Open(GroupOptions),
    Route(String, Option<String>),
    Close,
    AfterRegister(String),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Registrar for Recorder {
    fn group<F>(&mut self, options: &GroupOptions, routes: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>,
    {
        self.events.push(Event::Open(options.clone()));
        let result = routes(self);
        self.events.push(Event::Close);
        result
    }

    fn add_route(&mut self, route: RouteDef) -> Result<(), Error> {
        self.events.push(Event::Route(route.path, route.name));
        Ok(())
    }
}

// ── Groups ───────────────────────────────────────────────────────────────────

struct Users {
    fail: bool,
}

impl Routes<Recorder> for Users {
    fn config(&self) -> GroupConfig {
        GroupConfig::builder().prefix("/users/").name("users").middleware("auth").build()
    }

    fn register(&self, group: &GroupConfig, router: &mut Recorder) -> Result<(), Error> {
        router.add_route(RouteDef::get(group.prefix("/")).name(group.name("index")))?;
        if self.fail {
            return Err(Error::register("controller missing"));
        }
        router.add_route(RouteDef::post(group.prefix("/")).name(group.name("store")))
    }

    fn after_register(&self, group: &GroupConfig, router: &mut Recorder) -> Result<(), Error> {
        router.events.push(Event::AfterRegister(group.base_name().to_owned()));
        Ok(())
    }
}

struct Empty;

impl Routes<Recorder> for Empty {
    fn register(&self, _: &GroupConfig, _: &mut Recorder) -> Result<(), Error> {
        Ok(())
    }

    fn after_register(&self, _: &GroupConfig, router: &mut Recorder) -> Result<(), Error> {
        router.events.push(Event::AfterRegister(String::new()));
        Ok(())
    }
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

#[test]
fn register_runs_inside_scope_and_after_register_follows() {
    let mut recorder = Recorder::default();
    RouteGroup::new(&mut recorder, Users { fail: false }).bind().unwrap();

    let auth = GroupConfig::builder().middleware("auth").build().group_options();
    assert_eq!(
        recorder.events,
        [
            Event::Open(auth),
            Event::Route("users/".into(), Some("users.index".into())),
            Event::Route("users/".into(), Some("users.store".into())),
            Event::Close,
            Event::AfterRegister("users".into()),
        ]
    );
}

#[test]
fn failed_register_skips_after_register() {
    let mut recorder = Recorder::default();
    let err = RouteGroup::new(&mut recorder, Users { fail: true }).bind().unwrap_err();

    assert!(matches!(err, Error::Register(_)));
    assert_eq!(recorder.events.last(), Some(&Event::Close));
    assert!(!recorder.events.iter().any(|e| matches!(e, Event::AfterRegister(_))));
}

#[test]
fn after_register_runs_for_empty_group() {
    let mut recorder = Recorder::default();
    RouteGroup::new(&mut recorder, Empty).bind().unwrap();

    assert_eq!(
        recorder.events,
        [Event::Open(GroupOptions::default()), Event::Close, Event::AfterRegister(String::new())]
    );
}

#[test]
fn default_after_register_is_a_no_op() {
    struct Plain;

    impl Routes<Recorder> for Plain {
        fn register(&self, _: &GroupConfig, router: &mut Recorder) -> Result<(), Error> {
            router.add_route(RouteDef::get("/"))
        }
    }

    let mut recorder = Recorder::default();
    RouteGroup::new(&mut recorder, Plain).bind().unwrap();
    assert_eq!(recorder.events.len(), 3);
    assert_eq!(recorder.events.last(), Some(&Event::Close));
}

#[test]
fn options_carry_every_attribute_unmodified() {
    struct Full;

    impl Routes<Recorder> for Full {
        fn config(&self) -> GroupConfig {
            GroupConfig::builder()
                .middleware(["web", "auth"])
                .domain("{tenant}.example.com")
                .where_param("id", "[0-9]+")
                .build()
        }

        fn register(&self, _: &GroupConfig, _: &mut Recorder) -> Result<(), Error> {
            Ok(())
        }
    }

    let mut recorder = Recorder::default();
    let group = RouteGroup::new(&mut recorder, Full);
    assert_eq!(group.group_options().len(), 3);
    group.bind().unwrap();

    let Event::Open(options) = &recorder.events[0] else {
        panic!("expected the scope to open first, got {:?}", recorder.events[0]);
    };
    assert_eq!(options.middleware(), Some(&Middleware::from(["web", "auth"])));
    assert_eq!(options.domain(), Some("{tenant}.example.com"));
    assert_eq!(options.regex().unwrap()["id"], "[0-9]+");
}

#[test]
fn group_helpers_reflect_config() {
    let mut recorder = Recorder::default();
    let group = RouteGroup::new(&mut recorder, Users { fail: false });

    assert_eq!(group.prefix("/{id}/edit"), "users/{id}/edit");
    assert_eq!(group.name("edit"), "users.edit");
    assert_eq!(group.name(""), "users");
    assert_eq!(group.config().raw_prefix(), "/users/");
    assert_eq!(group.group_options().keys().collect::<Vec<_>>(), ["middleware"]);
}

#[test]
fn after_register_error_propagates() {
    struct Finalizer;

    impl Routes<Recorder> for Finalizer {
        fn register(&self, _: &GroupConfig, _: &mut Recorder) -> Result<(), Error> {
            Ok(())
        }

        fn after_register(&self, _: &GroupConfig, _: &mut Recorder) -> Result<(), Error> {
            Err(Error::register("fallback route unavailable"))
        }
    }

    let mut recorder = Recorder::default();
    let err = RouteGroup::new(&mut recorder, Finalizer).bind().unwrap_err();
    assert_eq!(err.to_string(), "route registration failed: fallback route unavailable");
}

// ── Nesting against the in-memory table ──────────────────────────────────────

struct Admin {
    calls: RefCell<Vec<&'static str>>,
}

struct Posts;

impl Routes<RouteTable> for Posts {
    fn config(&self) -> GroupConfig {
        GroupConfig::builder()
            .prefix("admin/posts")
            .name("admin.posts")
            .middleware("can:edit-posts")
            .where_param("post", "[0-9]+")
            .build()
    }

    fn register(&self, group: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
        router.add_route(RouteDef::get(group.prefix("/")).name(group.name("index")))?;
        router.add_route(RouteDef::patch(group.prefix("{post}")).name(group.name("update")))
    }
}

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
        self.calls.borrow_mut().push("register");
        router.add_route(RouteDef::get(group.prefix("dashboard")).name(group.name("dashboard")))?;
        RouteGroup::new(router, Posts).bind()
    }

    fn after_register(&self, _: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
        assert_eq!(router.depth(), 0);
        assert_eq!(router.len(), 3);
        self.calls.borrow_mut().push("after_register");
        Ok(())
    }
}

#[test]
fn nested_group_inherits_parent_scope() {
    let admin = Admin { calls: RefCell::default() };
    let mut table = RouteTable::new();
    RouteGroup::new(&mut table, &admin).bind().unwrap();

    assert_eq!(*admin.calls.borrow(), ["register", "after_register"]);

    let dashboard = table.route("admin.dashboard").unwrap();
    assert_eq!(dashboard.path(), "/admin/dashboard");
    assert_eq!(dashboard.middleware(), ["web", "auth"]);

    let update = table.route("admin.posts.update").unwrap();
    assert_eq!(update.path(), "/admin/posts/{post}");
    assert_eq!(update.method(), &route_groups::Method::PATCH);
    assert_eq!(update.middleware(), ["web", "auth", "can:edit-posts"]);
    assert_eq!(update.domain(), Some("admin.example.com"));
    assert_eq!(update.regex()["post"], "[0-9]+");
}

#[test]
fn table_scope_is_closed_after_failed_bind() {
    struct Conflicting;

    impl Routes<RouteTable> for Conflicting {
        fn config(&self) -> GroupConfig {
            GroupConfig::builder().middleware("auth").build()
        }

        fn register(&self, _: &GroupConfig, router: &mut RouteTable) -> Result<(), Error> {
            router.add_route(RouteDef::get("/users/{id}"))?;
            router.add_route(RouteDef::get("/users/{id}"))
        }
    }

    let mut table = RouteTable::new();
    let err = RouteGroup::new(&mut table, Conflicting).bind().unwrap_err();

    assert!(matches!(err, Error::InvalidRoute { .. }));
    assert_eq!(table.depth(), 0);
    assert_eq!(table.len(), 1);
}
