//! The static route-to-view wiring of the album client. Everything here is
//! declaration; the decision logic lives in the guard.

use super::table::{Route, RouteMeta, RouteTable, ViewId};

pub const LOGIN_VIEW: ViewId = ViewId::new("Login");
pub const HOME_VIEW: ViewId = ViewId::new("Home");
pub const ALBUM_LIST_VIEW: ViewId = ViewId::new("AlbumList");
pub const ALBUM_DETAIL_VIEW: ViewId = ViewId::new("AlbumDetail");
pub const IMAGE_DETAIL_VIEW: ViewId = ViewId::new("ImageDetail");
pub const PUBLIC_ALBUM_VIEW: ViewId = ViewId::new("PublicAlbum");
pub const PUBLIC_IMAGE_VIEW: ViewId = ViewId::new("PublicImage");

fn route(name: &'static str, pattern: &str, view: ViewId, meta: RouteMeta) -> Route {
    Route::new(name, pattern, view, meta).expect("static album pattern is valid")
}

/// Build the album client's route table.
///
/// The `/public/...` routes carry a share token as a trailing path segment;
/// they bypass authentication entirely and the token is checked downstream
/// by the data layer, not here.
pub fn album_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::redirect_to("NotFound", "/*", "/login").expect("static album pattern is valid"),
        route(
            "Login",
            "/login",
            LOGIN_VIEW,
            RouteMeta::new("Sign In")
                .public()
                .without_nav()
                .redirect_on_auth("/home"),
        ),
        route("Home", "/home", HOME_VIEW, RouteMeta::new("Home")),
        route("Albums", "/albums", ALBUM_LIST_VIEW, RouteMeta::new("All Albums")),
        route(
            "AlbumDetail",
            "/album/:id",
            ALBUM_DETAIL_VIEW,
            RouteMeta::new("Album Detail"),
        ),
        route(
            "ImageDetail",
            "/album/:id/image/:image",
            IMAGE_DETAIL_VIEW,
            RouteMeta::new("Image Detail"),
        ),
        route(
            "PublicAlbum",
            "/public/album/:id/:token",
            PUBLIC_ALBUM_VIEW,
            RouteMeta::new("Shared Album").public().without_nav(),
        ),
        route(
            "PublicImage",
            "/public/album/:id/image/:image/:token",
            PUBLIC_IMAGE_VIEW,
            RouteMeta::new("Shared Image").public().without_nav(),
        ),
    ])
    .expect("album route table is statically valid")
}
