//! HTTP surface and request pipelines for Travel.AI
//!
//! One route, two deployable pipelines. The handler validates nothing
//! itself; the active pipeline checks the fields it requires and the
//! boundary maps typed errors to status codes.

mod context;
mod pipeline;
mod prompt;
mod routes;


pub use context::AppContext;
pub use pipeline::{ChatPipeline, QueryPipeline, RagPipeline, clean_chat_response};
pub use routes::{QueryRequest, QueryResponse, router};
