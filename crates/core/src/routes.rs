//! Static route table.
//!
//! The table maps named route paths to the page that should be mounted there. It is fixed at
//! compile time; path matching, parameters and navigation belong to the host router.

use serde::Serialize;

/// Named route paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutePath {
    Home,
    LoadReddit,
}

impl RoutePath {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Home => "home",
            RoutePath::LoadReddit => "load-reddit",
        }
    }

    /// Absolute URL path of the route, e.g. `/home`.
    pub fn url(&self) -> String {
        format!("/{}", self.as_str())
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pages that can be mounted by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// A post and its nested comment thread.
    CommentThread,
}

impl Page {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Page::CommentThread => "comment-thread",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: RoutePath,
    pub element: Page,
    /// Whether this entry is the default route of its parent segment.
    pub index: bool,
}

/// Active routes, in declaration order.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: RoutePath::Home,
        element: Page::CommentThread,
        index: true,
    },
    // TODO: mount LoadReddit once a dataset upload page exists.
    // RouteEntry {
    //     path: RoutePath::LoadReddit,
    //     element: Page::LoadReddit,
    //     index: false,
    // },
];

pub fn routes() -> &'static [RouteEntry] {
    ROUTES
}

/// The first entry flagged as `index`, if any.
pub fn index_route() -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_the_only_active_route() {
        assert_eq!(
            routes(),
            &[RouteEntry {
                path: RoutePath::Home,
                element: Page::CommentThread,
                index: true,
            }]
        );
    }

    #[test]
    fn load_reddit_is_not_mounted() {
        assert!(routes()
            .iter()
            .all(|entry| entry.path != RoutePath::LoadReddit));
    }

    #[test]
    fn index_route_is_home() {
        let index = index_route().unwrap();
        assert_eq!(index.path, RoutePath::Home);
        assert_eq!(index.path.url(), "/home");
    }

    #[test]
    fn route_entries_serialize_with_kebab_case_names() {
        let json = serde_json::to_string(&ROUTES[0]).unwrap();
        assert_eq!(
            json,
            r#"{"path":"home","element":"comment-thread","index":true}"#
        );
    }
}
