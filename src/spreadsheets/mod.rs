mod export_csv;
mod export_xlsx;

pub use export_csv::{opportunities_to_csv, CSV_HEADERS};
pub use export_xlsx::export_opportunities_xlsx;
