//! Grouping options handed to a [`Registrar`](crate::Registrar).
//!
//! [`GroupOptions`] is the binder-agnostic form of a group's shared
//! attributes. A key is present only when the group set a non-empty value
//! for it; there is never a key holding an empty value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Middleware applied to every route of a group: one name or an ordered list.
///
/// Passed through as given. A single name stays a single name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Middleware {
    One(String),
    Many(Vec<String>),
}

impl Middleware {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(name) => name.is_empty(),
            Self::Many(names) => names.is_empty(),
        }
    }

    /// The middleware names in application order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        };
        names.iter().map(String::as_str)
    }
}

impl From<&str> for Middleware {
    fn from(name: &str) -> Self {
        Self::One(name.to_owned())
    }
}

impl From<String> for Middleware {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl<S: Into<String>> From<Vec<S>> for Middleware {
    fn from(names: Vec<S>) -> Self {
        Self::Many(names.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Middleware {
    fn from(names: [S; N]) -> Self {
        Self::Many(names.into_iter().map(Into::into).collect())
    }
}

/// The options mapping for a route group.
///
/// Serializes to exactly the keys that are present:
///
/// ```rust
/// use route_groups::GroupConfig;
///
/// let options = GroupConfig::builder().middleware("auth").build().group_options();
/// assert_eq!(options.keys().collect::<Vec<_>>(), ["middleware"]);
/// assert!(!options.contains("domain"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct GroupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) middleware: Option<Middleware>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) regex: Option<BTreeMap<String, String>>,
}

impl GroupOptions {
    pub const MIDDLEWARE: &'static str = "middleware";
    pub const DOMAIN: &'static str = "domain";
    pub const REGEX: &'static str = "regex";

    pub fn middleware(&self) -> Option<&Middleware> {
        self.middleware.as_ref()
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn regex(&self) -> Option<&BTreeMap<String, String>> {
        self.regex.as_ref()
    }

    /// Present keys, in the order `middleware`, `domain`, `regex`.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        [
            (Self::MIDDLEWARE, self.middleware.is_some()),
            (Self::DOMAIN, self.domain.is_some()),
            (Self::REGEX, self.regex.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middleware_emptiness() {
        assert!(Middleware::from("").is_empty());
        assert!(Middleware::Many(vec![]).is_empty());
        assert!(!Middleware::from("auth").is_empty());
        assert!(!Middleware::from(["auth", "verified"]).is_empty());
    }

    #[test]
    fn middleware_names_keep_order() {
        let m = Middleware::from(vec!["web", "auth", "throttle"]);
        assert_eq!(m.names().collect::<Vec<_>>(), ["web", "auth", "throttle"]);
        assert_eq!(Middleware::from("auth").names().collect::<Vec<_>>(), ["auth"]);
    }

    #[test]
    fn empty_options_have_no_keys() {
        let options = GroupOptions::default();
        assert!(options.is_empty());
        assert_eq!(options.keys().count(), 0);
        assert_eq!(serde_json::to_value(&options).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn serializes_only_present_keys() {
        let options = GroupOptions {
            middleware: Some(Middleware::from(["web", "auth"])),
            domain: None,
            regex: Some(BTreeMap::from([("id".to_owned(), "[0-9]+".to_owned())])),
        };
        assert_eq!(options.len(), 2);
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({"middleware": ["web", "auth"], "regex": {"id": "[0-9]+"}}),
        );
    }

    #[test]
    fn single_middleware_stays_a_string() {
        let options = GroupOptions { middleware: Some("auth".into()), ..Default::default() };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({"middleware": "auth"}),
        );
    }
}
