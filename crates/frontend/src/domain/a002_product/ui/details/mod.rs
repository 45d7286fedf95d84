mod form;
mod view;

pub use form::{ProductForm, ProductFormError, ProductFormPatch};
pub use view::ProductDialog;
