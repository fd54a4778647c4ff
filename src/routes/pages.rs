use std::path::Path;

use axum::Router;
use tower_http::services::ServeFile;

use crate::state::SharedState;

/// URL path and template file for every HTML page.
pub const PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/login.html", "login.html"),
    ("/features.html", "features.html"),
    ("/mentors.html", "mentors.html"),
    // Session details arrive as query parameters and are rendered client-side.
    ("/payment.html", "payment.html"),
];

pub fn page_routes(templates_dir: &Path) -> Router<SharedState> {
    PAGES
        .iter()
        .fold(Router::new(), |router, (path, file)| {
            router.route_service(path, ServeFile::new(templates_dir.join(file)))
        })
}
