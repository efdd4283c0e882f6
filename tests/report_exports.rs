use benefit_reports::db::Database;
use benefit_reports::errors::ReportError;
use benefit_reports::models::{ClaimStatus, EmployeeCountRow, EnrollmentStatus};
use benefit_reports::reporting::aggregation::{
    count_employees_by_organization, sum_premium_by_organization, summarize_claims_by_enrollment,
};
use benefit_reports::reporting::export::document::NO_DATA_MARKER;
use benefit_reports::reporting::{ExportFormat, ExportOptions, OrganizationFilter, ReportService};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use chrono::NaiveDate;
use lopdf::content::Content;
use lopdf::{Document, Object};
use rust_decimal::Decimal;
use std::io::Cursor;
use tempfile::TempDir;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn file_db(dir: &TempDir) -> Database {
    let path = dir.path().join("benefits.db");
    Database::new(path.to_str().unwrap()).unwrap()
}

fn pdf_page_texts(bytes: &[u8]) -> Vec<Vec<String>> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|id| {
            let content = Content::decode(&doc.get_page_content(*id).unwrap()).unwrap();
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(text, _)) => Some(String::from_utf8_lossy(text).into_owned()),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_scenario_organization_without_employees_is_listed() {
    let dir = TempDir::new().unwrap();
    let db = file_db(&dir);
    let a = db.create_organization("A").unwrap();
    let b = db.create_organization("B").unwrap();
    for i in 0..5 {
        db.create_employee(a, &format!("Staff {}", i), None, day()).unwrap();
    }

    let rows = db.read_snapshot(|conn| count_employees_by_organization(conn, None)).unwrap();
    assert_eq!(rows, vec![
        EmployeeCountRow { organization_id: a, organization_name: "A".into(), employee_count: 5 },
        EmployeeCountRow { organization_id: b, organization_name: "B".into(), employee_count: 0 },
    ]);
}

#[test]
fn test_scenario_claims_summary_sums_only_approved() {
    let db = Database::in_memory().unwrap();
    let org = db.create_organization("A").unwrap();
    let emp = db.create_employee(org, "Ada", None, day()).unwrap();
    let e = db.create_enrollment(emp, "Health", amount(20_000), EnrollmentStatus::Active, day()).unwrap();
    db.create_claim(e, amount(10_000), ClaimStatus::Approved, day()).unwrap();
    db.create_claim(e, amount(5_000), ClaimStatus::Approved, day()).unwrap();
    db.create_claim(e, amount(7_500), ClaimStatus::Rejected, day()).unwrap();

    let rows = db.read_snapshot(summarize_claims_by_enrollment).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].enrollment_id, e);
    assert_eq!(rows[0].total_claims, 3);
    assert_eq!(rows[0].total_approved_amount.to_string(), "150.00");
    assert!(rows[0].total_approved_amount <= amount(22_500));
}

#[test]
fn test_scenario_empty_document_export_has_no_data_marker() {
    let db = Database::in_memory().unwrap();
    let service = ReportService::new(db, ExportOptions::default());

    let artifact = service.export_employee_counts(ExportFormat::Document).unwrap();
    let pages = pdf_page_texts(&artifact.bytes);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].iter().any(|t| t == "Organization Name"));
    assert!(pages[0].iter().any(|t| t == NO_DATA_MARKER));
}

#[test]
fn test_empty_spreadsheet_export_is_header_only() {
    let db = Database::in_memory().unwrap();
    let service = ReportService::new(db, ExportOptions::default());

    let artifact = service.export_employee_counts(ExportFormat::Spreadsheet).unwrap();
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(artifact.bytes)).unwrap();
    let range = workbook.worksheet_range("Employees").unwrap();
    assert_eq!(range.height(), 1);
}

#[test]
fn test_spreadsheet_export_matches_aggregation() {
    let dir = TempDir::new().unwrap();
    let db = file_db(&dir);
    let mut expected = Vec::new();
    for (name, staff) in [("North", 3), ("South", 0), ("East", 7), ("West", 1)] {
        let id = db.create_organization(name).unwrap();
        for i in 0..staff {
            db.create_employee(id, &format!("{} {}", name, i), None, day()).unwrap();
        }
        expected.push((id, name, staff));
    }

    let service = ReportService::new(db, ExportOptions::default());
    let artifact = service.export_employee_counts(ExportFormat::Spreadsheet).unwrap();
    assert_eq!(artifact.file_name, "employee-counts.xlsx");

    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(artifact.bytes)).unwrap();
    let range = workbook.worksheet_range("Employees").unwrap();
    let rows: Vec<&[Data]> = range.rows().collect();
    assert_eq!(rows.len(), expected.len() + 1);
    for (row, (id, name, staff)) in rows[1..].iter().zip(&expected) {
        assert_eq!(row[0], Data::Float(*id as f64));
        assert_eq!(row[1], Data::String(name.to_string()));
        assert_eq!(row[2], Data::Float(*staff as f64));
    }
}

#[test]
fn test_exports_are_repeatable() {
    let db = Database::in_memory().unwrap();
    for name in ["A", "B", "C"] {
        let id = db.create_organization(name).unwrap();
        db.create_employee(id, "Someone", None, day()).unwrap();
    }
    let service = ReportService::new(db, ExportOptions::default());

    for format in [ExportFormat::Spreadsheet, ExportFormat::Document] {
        let first = service.export_employee_counts(format).unwrap();
        let second = service.export_employee_counts(format).unwrap();
        assert_eq!(first.bytes, second.bytes, "{} export differs between runs", format);
    }
}

#[test]
fn test_export_ignores_dashboard_filter_and_covers_all_organizations() {
    let db = Database::in_memory().unwrap();
    let a = db.create_organization("A").unwrap();
    db.create_organization("B").unwrap();
    let service = ReportService::new(db, ExportOptions { rows_per_page: 1, ..Default::default() });

    let filtered = service.dashboard(OrganizationFilter::Only(a)).unwrap();
    assert_eq!(filtered.employee_counts.len(), 1);

    let artifact = service.export_employee_counts(ExportFormat::Document).unwrap();
    assert_eq!(pdf_page_texts(&artifact.bytes).len(), 2);
}

#[test]
fn test_snapshot_hides_concurrent_writes() {
    let dir = TempDir::new().unwrap();
    let db = file_db(&dir);
    let org = db.create_organization("A").unwrap();
    db.create_employee(org, "Ada", None, day()).unwrap();

    let writer = db.clone();
    let (before, after) = db
        .read_snapshot(|conn| {
            let before = count_employees_by_organization(conn, None)?;
            // Commits on the writer connection while the snapshot is open
            let emp = writer.create_employee(org, "Grace", None, day())?;
            writer.create_enrollment(emp, "Health", amount(9_900), EnrollmentStatus::Active, day())?;
            let after = count_employees_by_organization(conn, None)?;
            let premiums = sum_premium_by_organization(conn, None)?;
            assert_eq!(premiums[0].total_premium_collected, amount(0));
            Ok((before, after))
        })
        .unwrap();
    assert_eq!(before, after);
    assert_eq!(after[0].employee_count, 1);

    let fresh = db.read_snapshot(|conn| count_employees_by_organization(conn, None)).unwrap();
    assert_eq!(fresh[0].employee_count, 2);
}

#[test]
fn test_dashboard_reads_do_not_modify_store() {
    let dir = TempDir::new().unwrap();
    let db = file_db(&dir);
    let org = db.create_organization("A").unwrap();
    db.create_employee(org, "Ada", None, day()).unwrap();
    let service = ReportService::new(db.clone(), ExportOptions::default());

    let first = service.dashboard(OrganizationFilter::All).unwrap();
    let second = service.dashboard(OrganizationFilter::All).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unreachable_store_is_data_access_error() {
    let dir = TempDir::new().unwrap();
    let db = file_db(&dir);
    let service = ReportService::new(db, ExportOptions::default());
    drop(dir);

    let err = service.dashboard(OrganizationFilter::All).unwrap_err();
    assert!(matches!(err, ReportError::DataAccess(_)), "unexpected error: {err}");
    let err = service.export_employee_counts(ExportFormat::Spreadsheet).unwrap_err();
    assert!(matches!(err, ReportError::DataAccess(_)), "unexpected error: {err}");
}
