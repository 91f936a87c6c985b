//! Review Handlers

pub(crate) mod create;
pub(crate) mod create_with_images;
pub(crate) mod delete;
pub(crate) mod index;
