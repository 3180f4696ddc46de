pub mod model;
mod routes;

pub use routes::get_router;
