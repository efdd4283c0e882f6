use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use crate::errors::ReportError;
use crate::models::EmployeeCountRow;
use super::{ExportOptions, HEADER};

// A4 portrait, in points
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN_LEFT: i64 = 50;
const MARGIN_RIGHT: i64 = 545;
const TITLE_Y: i64 = 800;
const HEADER_Y: i64 = 770;
const FIRST_ROW_Y: i64 = 750;
const LINE_HEIGHT: i64 = 16;
const BOTTOM_MARGIN: i64 = 50;
const FOOTER_Y: i64 = 30;
const COLUMN_X: [i64; 3] = [MARGIN_LEFT, 150, 450];

const TITLE_SIZE: i64 = 14;
const BODY_SIZE: i64 = 10;

/// Rows that fit between the header and the bottom margin.
pub const MAX_ROWS_PER_PAGE: usize = ((FIRST_ROW_Y - BOTTOM_MARGIN) / LINE_HEIGHT + 1) as usize;

/// Body text shown when there are no rows to report.
pub const NO_DATA_MARKER: &str = "No data";

const PRODUCER: &str = "benefit-reports";

/// Render the rows into a paginated PDF.
///
/// Every page starts with the title and the column header. An empty input
/// still yields one page carrying [`NO_DATA_MARKER`]. No timestamps or random
/// identifiers are embedded.
pub fn render(rows: &[EmployeeCountRow], options: &ExportOptions) -> Result<Vec<u8>, ReportError> {
    let per_page = options.rows_per_page.clamp(1, MAX_ROWS_PER_PAGE);
    let chunks: Vec<&[EmployeeCountRow]> = if rows.is_empty() {
        vec![rows]
    } else {
        rows.chunks(per_page).collect()
    };
    let total_pages = chunks.len();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(total_pages);
    for (index, chunk) in chunks.iter().enumerate() {
        let content = page_content(chunk, index + 1, total_pages, &options.document_title);
        let encoded = content.encode().map_err(pdf_error)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(total_pages as i64),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(&options.document_title)),
        "Producer" => Object::string_literal(PRODUCER),
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(write_error)?;
    Ok(buffer)
}

fn page_content(rows: &[EmployeeCountRow], page: usize, total_pages: usize, title: &str) -> Content {
    let mut ops = Vec::new();

    push_text(&mut ops, "F2", TITLE_SIZE, MARGIN_LEFT, TITLE_Y, title);
    for (label, x) in HEADER.iter().zip(COLUMN_X) {
        push_text(&mut ops, "F2", BODY_SIZE, x, HEADER_Y, label);
    }

    // Rule under the header
    ops.push(Operation::new("w", vec![Object::Integer(1)]));
    ops.push(Operation::new("m", vec![Object::Integer(MARGIN_LEFT), Object::Integer(HEADER_Y - 4)]));
    ops.push(Operation::new("l", vec![Object::Integer(MARGIN_RIGHT), Object::Integer(HEADER_Y - 4)]));
    ops.push(Operation::new("S", vec![]));

    if rows.is_empty() {
        push_text(&mut ops, "F1", BODY_SIZE, MARGIN_LEFT, FIRST_ROW_Y, NO_DATA_MARKER);
    }

    for (line, row) in rows.iter().enumerate() {
        let y = FIRST_ROW_Y - line as i64 * LINE_HEIGHT;
        push_text(&mut ops, "F1", BODY_SIZE, COLUMN_X[0], y, &row.organization_id.to_string());
        push_text(&mut ops, "F1", BODY_SIZE, COLUMN_X[1], y, &row.organization_name);
        push_text(&mut ops, "F1", BODY_SIZE, COLUMN_X[2], y, &row.employee_count.to_string());
    }

    let footer = format!("Page {} of {}", page, total_pages);
    push_text(&mut ops, "F1", BODY_SIZE, MARGIN_LEFT, FOOTER_Y, &footer);

    Content { operations: ops }
}

fn push_text(ops: &mut Vec<Operation>, font: &str, size: i64, x: i64, y: i64, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![Object::Name(font.as_bytes().to_vec()), Object::Integer(size)]));
    ops.push(Operation::new("Td", vec![Object::Integer(x), Object::Integer(y)]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]));
    ops.push(Operation::new("ET", vec![]));
}

/// Map text onto the single-byte encoding of the standard fonts.
/// Characters WinAnsi cannot draw are replaced with `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        // C1 controls occupy 0x80-0x9F in Latin-1, where WinAnsi has glyphs
        '\u{80}'..='\u{9f}' => b'?',
        '\u{0}'..='\u{ff}' => c as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017d}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203a}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017e}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => b'?',
    }
}

fn pdf_error(e: lopdf::Error) -> ReportError {
    ReportError::ExportGeneration(format!("Document generation failed: {}", e))
}

fn write_error(e: std::io::Error) -> ReportError {
    ReportError::ExportGeneration(format!("Document serialization failed: {}", e))
}
