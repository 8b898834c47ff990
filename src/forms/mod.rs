// src/forms/mod.rs
//
// Modal controllers: typed form state, create/edit submit, and read-only
// detail views.

pub mod modal;
pub mod state;
pub mod view;


pub use modal::{FormMode, FormModal};
pub use state::{FormError, FormState};
pub use view::{ViewAction, ViewModal};
