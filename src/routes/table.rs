use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::pattern::Pattern;

/// Opaque reference to a view. The navigation layer never looks inside;
/// it only decides whether the view may be entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewId(&'static str);

impl ViewId {
    pub const fn new(id: &'static str) -> Self {
        ViewId(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Static attributes attached to a route: display title template, auth
/// requirement, and UI chrome control.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct RouteMeta {
    /// Title template; `{placeholder}` occurrences are resolved from the
    /// extracted captures, or by the view at render time.
    pub title: String,
    /// A route must opt out of authentication explicitly.
    #[serde(default = "default_requires_auth")]
    pub requires_auth: bool,
    /// Suppress the primary navigation chrome on this route.
    #[serde(default)]
    pub disable_nav: bool,
    /// Where an already-authenticated user is sent if they land here.
    #[serde(default)]
    pub redirect_on_auth: Option<String>,
}

fn default_requires_auth() -> bool {
    true
}

impl RouteMeta {
    pub fn new(title: impl Into<String>) -> Self {
        RouteMeta {
            title: title.into(),
            requires_auth: true,
            disable_nav: false,
            redirect_on_auth: None,
        }
    }

    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    pub fn without_nav(mut self) -> Self {
        self.disable_nav = true;
        self
    }

    pub fn redirect_on_auth(mut self, target: impl Into<String>) -> Self {
        self.redirect_on_auth = Some(target.into());
        self
    }
}

/// A single route table entry.
#[derive(Clone, Debug)]
pub struct Route {
    pub name: &'static str,
    pub pattern: Pattern,
    pub view: Option<ViewId>,
    pub meta: RouteMeta,
    /// Route-level redirect, used by the catch-all not-found entry. Checked
    /// before the guard runs.
    pub redirect: Option<&'static str>,
}

impl Route {
    pub fn new(
        name: &'static str,
        pattern: &str,
        view: ViewId,
        meta: RouteMeta,
    ) -> Result<Self, String> {
        Ok(Route {
            name,
            pattern: Pattern::parse(pattern)?,
            view: Some(view),
            meta,
            redirect: None,
        })
    }

    /// A viewless entry that forwards to another path, e.g. the catch-all
    /// not-found route forwarding to sign-in.
    pub fn redirect_to(
        name: &'static str,
        pattern: &str,
        target: &'static str,
    ) -> Result<Self, String> {
        Ok(Route {
            name,
            pattern: Pattern::parse(pattern)?,
            view: None,
            meta: RouteMeta::new("").public(),
            redirect: Some(target),
        })
    }
}

/// A resolved navigation target: the matched route plus extracted captures.
#[derive(Debug, Clone)]
pub struct Resolved<'t> {
    pub route: &'t Route,
    pub params: HashMap<String, String>,
}

/// The static route table. Resolution picks the single best match under
/// the specificity order; construction rejects tables that rule cannot
/// order unambiguously.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, String> {
        for (i, a) in routes.iter().enumerate() {
            for b in &routes[i + 1..] {
                if a.name == b.name {
                    return Err(format!("Duplicate route name '{}'", a.name));
                }
                if a.pattern.overlaps(&b.pattern) && a.pattern.specificity() == b.pattern.specificity()
                {
                    return Err(format!(
                        "Routes '{}' and '{}' are ambiguous under the specificity rule",
                        a.name, b.name
                    ));
                }
            }
        }
        Ok(RouteTable { routes })
    }

    /// Resolve a target path to its best match. The query string and
    /// fragment are stripped first; the guard never sees them.
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_>> {
        let path = strip_query(path);
        self.routes
            .iter()
            .filter_map(|route| {
                route
                    .pattern
                    .matches(path)
                    .map(|params| Resolved { route, params })
            })
            .max_by_key(|resolved| resolved.route.pattern.specificity())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
