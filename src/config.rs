//! Route group configuration.
//!
//! A [`GroupConfig`] is the immutable description of one group: its path
//! prefix, its route name namespace and the attributes shared by every route
//! registered inside it. Build it with [`GroupConfig::builder`] or load it
//! from a config file; it cannot change once built.
//!
//! ```rust
//! use route_groups::GroupConfig;
//!
//! let config = GroupConfig::builder()
//!     .prefix("/admin/")
//!     .name("users")
//!     .middleware(["web", "auth"])
//!     .where_param("id", "[0-9]+")
//!     .build();
//!
//! assert_eq!(config.prefix("users/{id}"), "admin/users/{id}");
//! assert_eq!(config.name("show"), "users.show");
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::options::{GroupOptions, Middleware};
use crate::path;

/// Immutable configuration of a route group.
///
/// Deserializes from any serde format; missing keys take their defaults.
///
/// ```rust
/// use route_groups::GroupConfig;
///
/// let config: GroupConfig = serde_json::from_str(r#"{"name": "api", "middleware": "auth"}"#).unwrap();
/// assert_eq!(config.base_name(), "api");
/// assert_eq!(config.prefix("users"), "users");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(from = "GroupConfigBuilder")]
pub struct GroupConfig {
    prefix: String,
    name: Option<String>,
    middleware: Option<Middleware>,
    domain: Option<String>,
    regex: BTreeMap<String, String>,
}

impl GroupConfig {
    pub fn builder() -> GroupConfigBuilder {
        GroupConfigBuilder::default()
    }

    /// The raw prefix as configured. `"/"` when unset; an empty string is
    /// kept as given and is not the root.
    pub fn raw_prefix(&self) -> &str {
        &self.prefix
    }

    /// Places `path` under this group's prefix.
    ///
    /// A group whose prefix is the root `"/"` returns `path` untouched.
    /// Otherwise both sides are normalized and joined by a single `/`; see
    /// [`path::merge`] for the empty-half cases.
    pub fn prefix(&self, path: &str) -> String {
        if self.prefix == path::ROOT {
            return path.to_owned();
        }
        path::merge(&self.prefix, path)
    }

    /// The group's name namespace, or `""` when the group has none.
    pub fn base_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Namespaces `suffix` under the group name.
    ///
    /// An empty suffix yields the bare group name. A group without a name
    /// returns `suffix` as is.
    ///
    /// ```rust
    /// use route_groups::GroupConfig;
    ///
    /// let users = GroupConfig::builder().name("users").build();
    /// assert_eq!(users.name("create"), "users.create");
    /// assert_eq!(users.name(""), "users");
    ///
    /// let anonymous = GroupConfig::default();
    /// assert_eq!(anonymous.name("create"), "create");
    /// assert_eq!(anonymous.name(""), "");
    /// ```
    pub fn name(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            return self.base_name().to_owned();
        }
        match self.name.as_deref() {
            Some(base) => format!("{base}.{suffix}"),
            None => suffix.to_owned(),
        }
    }

    /// The options mapping handed to the registrar when the group is bound.
    ///
    /// Only attributes that are set and non-empty appear.
    pub fn group_options(&self) -> GroupOptions {
        GroupOptions {
            middleware: self.middleware.clone().filter(|m| !m.is_empty()),
            domain: self.domain.clone().filter(|d| !d.is_empty()),
            regex: (!self.regex.is_empty()).then(|| self.regex.clone()),
        }
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        GroupConfigBuilder::default().build()
    }
}

/// Builder for [`GroupConfig`]. Every setter returns `self` so calls chain.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GroupConfigBuilder {
    prefix: Option<String>,
    name: Option<String>,
    middleware: Option<Middleware>,
    domain: Option<String>,
    regex: BTreeMap<String, String>,
}

impl GroupConfigBuilder {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn middleware(mut self, middleware: impl Into<Middleware>) -> Self {
        self.middleware = Some(middleware.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Replaces every parameter pattern at once.
    pub fn regex<K, V>(mut self, patterns: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.regex = patterns.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Constrains one route parameter to `pattern`.
    pub fn where_param(mut self, param: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.regex.insert(param.into(), pattern.into());
        self
    }

    /// Freezes the builder.
    ///
    /// An unset prefix becomes the root `"/"` and an empty name counts as no
    /// name. Grouping attributes are kept verbatim.
    pub fn build(self) -> GroupConfig {
        GroupConfig {
            prefix: self.prefix.unwrap_or_else(|| path::ROOT.to_owned()),
            name: self.name.filter(|n| !n.is_empty()),
            middleware: self.middleware,
            domain: self.domain,
            regex: self.regex,
        }
    }
}

impl From<GroupConfigBuilder> for GroupConfig {
    fn from(builder: GroupConfigBuilder) -> Self {
        builder.build()
    }
}
