mod form;
mod view;

pub(crate) use form::non_empty;
pub use form::{CategoryForm, CategoryFormError, CategoryFormPatch};
pub use view::CategoryDialog;
