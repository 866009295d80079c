#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// One worksheet cell for [`build_xlsx`].
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    /// Excel serial day number, styled with the built-in `m/d/yyyy` format.
    Date(u32),
    Bool(bool),
    Empty,
}

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Builds a minimal single-sheet workbook. Strings go through the shared string table.
pub fn build_xlsx(rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut shared_strings: Vec<String> = Vec::new();
    let mut sheet_rows = String::new();

    for (r, row) in rows.iter().enumerate() {
        sheet_rows.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_letter(c), r + 1);
            let xml = match cell {
                Cell::Text(text) => {
                    shared_strings.push(text.to_string());
                    format!(
                        r#"<c r="{}" t="s"><v>{}</v></c>"#,
                        reference,
                        shared_strings.len() - 1
                    )
                }
                Cell::Number(n) => format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n),
                Cell::Date(serial) => {
                    format!(r#"<c r="{}" s="1"><v>{}</v></c>"#, reference, serial)
                }
                Cell::Bool(b) => format!(
                    r#"<c r="{}" t="b"><v>{}</v></c>"#,
                    reference,
                    if *b { 1 } else { 0 }
                ),
                Cell::Empty => String::new(),
            };
            sheet_rows.push_str(&xml);
        }
        sheet_rows.push_str("</row>");
    }

    let content_types = format!(
        r#"{}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/><Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/></Types>"#,
        XML_DECL
    );

    let root_rels = format!(
        r#"{}<Relationships xmlns="{}"><Relationship Id="rId1" Type="{}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
        XML_DECL, PKG_REL_NS, REL_NS
    );

    let workbook = format!(
        r#"{}<workbook xmlns="{}" xmlns:r="{}"><sheets><sheet name="Hoja1" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        XML_DECL, MAIN_NS, REL_NS
    );

    let workbook_rels = format!(
        r#"{decl}<Relationships xmlns="{pkg}"><Relationship Id="rId1" Type="{rel}/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="{rel}/styles" Target="styles.xml"/><Relationship Id="rId3" Type="{rel}/sharedStrings" Target="sharedStrings.xml"/></Relationships>"#,
        decl = XML_DECL,
        pkg = PKG_REL_NS,
        rel = REL_NS
    );

    let styles = format!(
        r#"{}<styleSheet xmlns="{}"><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/></cellXfs></styleSheet>"#,
        XML_DECL, MAIN_NS
    );

    let shared = format!(
        r#"{decl}<sst xmlns="{ns}" count="{n}" uniqueCount="{n}">{items}</sst>"#,
        decl = XML_DECL,
        ns = MAIN_NS,
        n = shared_strings.len(),
        items = shared_strings
            .iter()
            .map(|s| format!("<si><t>{}</t></si>", escape(s)))
            .collect::<String>()
    );

    let sheet = format!(
        r#"{}<worksheet xmlns="{}" xmlns:r="{}"><sheetData>{}</sheetData></worksheet>"#,
        XML_DECL, MAIN_NS, REL_NS, sheet_rows
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in [
        ("[Content_Types].xml", content_types),
        ("_rels/.rels", root_rels),
        ("xl/workbook.xml", workbook),
        ("xl/_rels/workbook.xml.rels", workbook_rels),
        ("xl/styles.xml", styles),
        ("xl/sharedStrings.xml", shared),
        ("xl/worksheets/sheet1.xml", sheet),
    ] {
        zip.start_file(name, SimpleFileOptions::default()).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Single-byte Latin-1 encoding, as a Windows spreadsheet export would write it.
pub fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(c as u32).expect("latin-1 character"))
        .collect()
}
