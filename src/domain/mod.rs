mod opportunity;
mod scoring;

pub use opportunity::{FilterConfig, Opportunity};
pub use scoring::{evaluate, gross_yield, round_pct, select_opportunities};
