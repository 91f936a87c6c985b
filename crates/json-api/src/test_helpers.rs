//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shopfront_app::{
    context::AppContext,
    domain::{
        about::MockAboutService,
        products::{MockProductsService, Product},
        reviews::{MockReviewsService, Review},
        upi::MockUpiService,
    },
    uploads::{MockUploadBackend, UploadPipeline},
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list().never();
    products.expect_create().never();
    products.expect_update().never();
    products.expect_delete().never();
    products.expect_search().never();
    products.expect_warm().never();

    products
}

fn strict_reviews_mock() -> MockReviewsService {
    let mut reviews = MockReviewsService::new();

    reviews.expect_list().never();
    reviews.expect_create().never();
    reviews.expect_delete().never();

    reviews
}

fn strict_about_mock() -> MockAboutService {
    let mut about = MockAboutService::new();

    about.expect_list().never();
    about.expect_create().never();
    about.expect_delete().never();

    about
}

fn strict_upi_mock() -> MockUpiService {
    let mut upi = MockUpiService::new();

    upi.expect_get().never();
    upi.expect_set().never();
    upi.expect_clear().never();

    upi
}

fn strict_backend_mock() -> MockUploadBackend {
    let mut backend = MockUploadBackend::new();

    backend.expect_persist().never();
    backend.expect_discard().never();

    backend
}

struct Mocks {
    products: MockProductsService,
    reviews: MockReviewsService,
    about: MockAboutService,
    upi: MockUpiService,
    backend: MockUploadBackend,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            products: strict_products_mock(),
            reviews: strict_reviews_mock(),
            about: strict_about_mock(),
            upi: strict_upi_mock(),
            backend: strict_backend_mock(),
        }
    }
}

fn make_state(mocks: Mocks) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(mocks.products),
        reviews: Arc::new(mocks.reviews),
        about: Arc::new(mocks.about),
        upi: Arc::new(mocks.upi),
        uploads: Arc::new(UploadPipeline::new(Arc::new(mocks.backend))),
    })
}

fn make_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    make_service(
        make_state(Mocks {
            products,
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn reviews_service(reviews: MockReviewsService, route: Router) -> Service {
    make_service(
        make_state(Mocks {
            reviews,
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn reviews_service_with_uploads(
    reviews: MockReviewsService,
    backend: MockUploadBackend,
    route: Router,
) -> Service {
    make_service(
        make_state(Mocks {
            reviews,
            backend,
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn about_service(about: MockAboutService, route: Router) -> Service {
    make_service(
        make_state(Mocks {
            about,
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn upi_service(upi: MockUpiService, route: Router) -> Service {
    make_service(
        make_state(Mocks {
            upi,
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn uploads_service(backend: MockUploadBackend, route: Router) -> Service {
    make_service(
        make_state(Mocks {
            backend,
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn make_product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: 499.0,
        ..Product::default()
    }
}

pub(crate) fn make_review(id: &str, product_id: &str) -> Review {
    Review {
        id: id.to_string(),
        product_id: product_id.to_string(),
        customer_name: "Asha".to_string(),
        rating: 5,
        comment: "Works great".to_string(),
        images: Vec::new(),
        date: "2026-02-21".to_string(),
        created_at: None,
    }
}
