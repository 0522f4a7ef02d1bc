pub mod docs_page;
pub mod routes;
