use crate::domain::Opportunity;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use crate::spreadsheets::CSV_HEADERS;
use rust_xlsxwriter::Workbook;

pub fn export_opportunities_xlsx(opportunities: &[Opportunity]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in CSV_HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, o) in opportunities.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &o.title)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write title: {e}")))?;

        worksheet
            .write_number(r, 1, o.price as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {e}")))?;

        worksheet
            .write_number(r, 2, o.surface)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write surface: {e}")))?;

        worksheet
            .write_string(r, 3, &o.zipcode)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write zipcode: {e}")))?;

        worksheet
            .write_number(r, 4, o.monthly_rent.round())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write rent: {e}")))?;

        worksheet
            .write_number(r, 5, o.yield_pct())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write yield: {e}")))?;

        worksheet
            .write_string(r, 6, &o.url)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write url: {e}")))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, "opportunites.xlsx")
}
