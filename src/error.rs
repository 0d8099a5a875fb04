//! Unified error type.

use thiserror::Error;

/// The error type returned by route registration and binding.
///
/// Grouping attributes (middleware names, domains, regex patterns) are never
/// validated here. They pass through opaquely and surface, if at all, when
/// the router that receives them uses them.
#[derive(Debug, Error)]
pub enum Error {
    /// The path could not be inserted into the route tree: bad parameter
    /// syntax, or it conflicts with a route already registered.
    #[error("invalid route `{path}`: {source}")]
    InvalidRoute {
        path: String,
        #[source]
        source: matchit::InsertError,
    },

    /// A route with this name is already registered.
    #[error("route name `{0}` is already registered")]
    DuplicateName(String),

    /// An application-defined failure raised from `register` or
    /// `after_register`.
    #[error("route registration failed: {0}")]
    Register(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an application error raised while registering routes.
    ///
    /// ```rust
    /// use route_groups::Error;
    ///
    /// let err = Error::register("controller not found");
    /// assert_eq!(err.to_string(), "route registration failed: controller not found");
    /// ```
    pub fn register(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Register(err.into())
    }
}
