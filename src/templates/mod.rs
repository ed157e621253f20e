pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{flash, params_form, Flash, FormValues};
pub use layouts::desktop::desktop_layout;
