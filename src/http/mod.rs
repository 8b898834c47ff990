// src/http/mod.rs
//
// Transport layer: session, HTTP client, interceptors and binary downloads

pub mod client;
pub mod download;
pub mod interceptors;
pub mod navigation;
pub mod session;


pub use client::{ApiClient, QueryPairs, NO_QUERY};
pub use download::Download;
pub use interceptors::{ErrorLogger, ResponseInterceptor, UnauthorizedRedirect};
pub use navigation::{History, Navigator};
pub use session::Session;
