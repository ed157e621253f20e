pub mod flash;
pub mod form;

pub use flash::{flash, Flash};
pub use form::{params_form, FormValues};
