mod client;
mod error;
mod models;

pub use client::JinkaClient;
pub use error::JinkaError;
pub use models::{Ad, AdsResponse};
