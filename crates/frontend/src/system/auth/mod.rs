pub mod api;
pub mod context;
pub mod guard;
pub mod login_form;
mod session;
pub mod storage;

pub use session::Session;
