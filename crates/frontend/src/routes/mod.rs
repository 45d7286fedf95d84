pub mod catalog;
#[allow(clippy::module_inception)]
pub mod routes;
