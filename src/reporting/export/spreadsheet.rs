use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, XlsxError};
use crate::errors::ReportError;
use crate::models::EmployeeCountRow;
use super::{ExportOptions, HEADER};

/// Largest integer an f64 numeric cell holds exactly.
const MAX_EXACT_CELL_INTEGER: u64 = 1 << 53;

/// Render the rows into a single-sheet workbook.
///
/// Row 1 holds the header; each input row follows in order. Ids and counts
/// are numeric cells. The creation timestamp is pinned so repeated renders
/// are byte-identical.
pub fn render(rows: &[EmployeeCountRow], options: &ExportOptions) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();

    let created = ExcelDateTime::from_ymd(2000, 1, 1).map_err(xlsx_error)?;
    let properties = DocProperties::new()
        .set_title(options.document_title.as_str())
        .set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(options.sheet_name.as_str()).map_err(xlsx_error)?;
    worksheet.set_column_width(0, 16.0).map_err(xlsx_error)?;
    worksheet.set_column_width(1, 40.0).map_err(xlsx_error)?;
    worksheet.set_column_width(2, 16.0).map_err(xlsx_error)?;
    worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    for (col, label) in HEADER.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *label, &header_format)
            .map_err(xlsx_error)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let sheet_row = u32::try_from(index + 1).map_err(|_| {
            ReportError::ExportGeneration(format!("Row {} exceeds worksheet capacity", index + 1))
        })?;
        worksheet
            .write_number(sheet_row, 0, exact_id(row.organization_id)?)
            .map_err(xlsx_error)?;
        worksheet
            .write_string(sheet_row, 1, row.organization_name.as_str())
            .map_err(xlsx_error)?;
        worksheet
            .write_number(sheet_row, 2, exact_count(row.employee_count)?)
            .map_err(xlsx_error)?;
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

fn exact_count(value: u64) -> Result<f64, ReportError> {
    if value > MAX_EXACT_CELL_INTEGER {
        return Err(ReportError::ExportGeneration(format!(
            "Employee count {} cannot be stored exactly in a numeric cell",
            value
        )));
    }
    Ok(value as f64)
}

fn exact_id(value: i64) -> Result<f64, ReportError> {
    if value.unsigned_abs() > MAX_EXACT_CELL_INTEGER {
        return Err(ReportError::ExportGeneration(format!(
            "Organization id {} cannot be stored exactly in a numeric cell",
            value
        )));
    }
    Ok(value as f64)
}

fn xlsx_error(e: XlsxError) -> ReportError {
    ReportError::ExportGeneration(format!("Spreadsheet generation failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use std::io::Cursor;

    fn row(id: i64, name: &str, count: u64) -> EmployeeCountRow {
        EmployeeCountRow {
            organization_id: id,
            organization_name: name.to_string(),
            employee_count: count,
        }
    }

    fn read_back(bytes: Vec<u8>, sheet: &str) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(sheet).unwrap();
        range.rows().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn test_header_plus_one_row_per_input_in_order() {
        let input = vec![row(7, "Zeta Corp", 12), row(2, "Acme", 5), row(9, "Initech", 0)];
        let bytes = render(&input, &ExportOptions::default()).unwrap();

        let cells = read_back(bytes, "Employees");
        assert_eq!(cells.len(), input.len() + 1);
        assert_eq!(cells[0][0], Data::String("Organization ID".into()));
        assert_eq!(cells[0][1], Data::String("Organization Name".into()));
        assert_eq!(cells[0][2], Data::String("Employee Count".into()));
        // Input order is kept even when ids are not sorted
        assert_eq!(cells[1][0], Data::Float(7.0));
        assert_eq!(cells[1][1], Data::String("Zeta Corp".into()));
        assert_eq!(cells[1][2], Data::Float(12.0));
        assert_eq!(cells[2][1], Data::String("Acme".into()));
        assert_eq!(cells[3][2], Data::Float(0.0));
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let bytes = render(&[], &ExportOptions::default()).unwrap();
        let cells = read_back(bytes, "Employees");
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].len(), HEADER.len());
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = vec![row(1, "Acme", 5), row(2, "Globex", 0)];
        let first = render(&input, &ExportOptions::default()).unwrap();
        let second = render(&input, &ExportOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_sheet_name() {
        let options = ExportOptions { sheet_name: "Headcount".to_string(), ..Default::default() };
        let bytes = render(&[row(1, "Acme", 3)], &options).unwrap();
        assert_eq!(read_back(bytes, "Headcount").len(), 2);
    }

    #[test]
    fn test_count_beyond_exact_range_is_export_error() {
        let err = render(&[row(1, "Huge", u64::MAX)], &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, ReportError::ExportGeneration(_)));
    }

    #[test]
    fn test_invalid_sheet_name_is_export_error() {
        let options = ExportOptions { sheet_name: "bad/name".to_string(), ..Default::default() };
        let err = render(&[], &options).unwrap_err();
        assert!(matches!(err, ReportError::ExportGeneration(_)));
    }
}
