//! App Router

use std::path::PathBuf;

use salvo::{serve_static::StaticDir, Router};

use crate::{about, healthcheck, products, reviews, upi, upload};

/// The full route tree: the JSON API under `/api`, plus the local upload
/// directory served under `/uploads` for the disk-backed storage mode.
pub(crate) fn app_router(uploads_dir: PathBuf) -> Router {
    Router::new()
        .push(
            Router::with_path("api")
                .push(Router::with_path("health").get(healthcheck::health))
                .push(Router::with_path("test").get(healthcheck::ping))
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(products::update::handler)
                                .delete(products::delete::handler),
                        ),
                )
                .push(Router::with_path("search").get(products::search::handler))
                .push(
                    Router::with_path("upi")
                        .get(upi::get::handler)
                        .post(upi::set::handler)
                        .delete(upi::clear::handler),
                )
                .push(
                    Router::with_path("reviews/{product_id}")
                        .get(reviews::index::handler)
                        .post(reviews::create::handler)
                        .push(
                            Router::with_path("{review_id}").delete(reviews::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("reviews-with-images/{product_id}")
                        .post(reviews::create_with_images::handler),
                )
                .push(
                    Router::with_path("about-product")
                        .post(about::create::handler)
                        .push(
                            Router::with_path("{product_id}")
                                .get(about::index::handler)
                                .push(
                                    Router::with_path("{post_id}").delete(about::delete::handler),
                                ),
                        ),
                )
                .push(Router::with_path("upload").post(upload::handler)),
        )
        .push(Router::with_path("uploads/{**rest}").get(StaticDir::new(uploads_dir)))
}
