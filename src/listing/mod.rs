// src/listing/mod.rs
//
// Generic list screens: filter state, server-side pagination and the
// controller that ties them to a fetch source.

pub mod controller;
pub mod filters;
pub mod pagination;


pub use controller::{page_of, ListController, ListSnapshot, ListSource, ListStatus, Refresh};
pub use filters::FilterState;
pub use pagination::{total_pages, PaginationState};
