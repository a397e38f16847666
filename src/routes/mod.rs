//! The route table: a static mapping from URL patterns to views, resolved
//! under an explicit specificity order.

pub mod album_routes;
pub mod pattern;
pub mod table;

pub use album_routes::album_routes;
pub use pattern::Pattern;
pub use table::{Resolved, Route, RouteMeta, RouteTable, ViewId};
