//! XLSX export of the reference tables.
//!
//! One worksheet per [`Sheet`], created in order. The workbook starts empty, so
//! no default sheet ever needs removing.

use crate::core::Sheet;
use rust_xlsxwriter::{Format, FormatBorder, Workbook, XlsxError};

const MAX_COLUMN_WIDTH: usize = 80;

/// Assemble the workbook in memory and return the xlsx bytes.
pub fn render(sheets: &[Sheet]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold().set_border_bottom(FormatBorder::Thin);

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;

        for (col, name) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *name, &header)?;
        }
        for (row, cells) in sheet.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                worksheet.write_string(row as u32 + 1, col as u16, *cell)?;
            }
        }

        for (col, width) in sheet.column_widths().into_iter().enumerate() {
            let width = width.min(MAX_COLUMN_WIDTH) + 2;
            worksheet.set_column_width(col as u16, width as f64)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        log::debug!("Sheet '{}': {} rows", sheet.name, sheet.rows.len());
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheets;
    use std::io::{Cursor, Read};

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut contents = String::new();
        entry.read_to_string(&mut contents).unwrap();
        contents
    }

    fn sheet_names(workbook_xml: &str) -> Vec<String> {
        workbook_xml
            .split("<sheet ")
            .skip(1)
            .filter_map(|s| {
                let start = s.find("name=\"")? + "name=\"".len();
                let end = s[start..].find('"')?;
                Some(s[start..start + end].to_string())
            })
            .collect()
    }

    #[test]
    fn exactly_three_named_sheets() {
        let bytes = render(&sheets()).unwrap();
        let names = sheet_names(&read_entry(&bytes, "xl/workbook.xml"));
        assert_eq!(names, vec!["Activity Data", "Health Metrics", "Sleep Data"]);
    }

    #[test]
    fn worksheets_hold_header_plus_rows() {
        let bytes = render(&sheets()).unwrap();
        for (index, expected_rows) in [(1, 18), (2, 15), (3, 8)] {
            let xml = read_entry(&bytes, &format!("xl/worksheets/sheet{index}.xml"));
            let rows = xml.matches("<row ").count();
            assert_eq!(rows, expected_rows + 1, "sheet{index}");
        }
    }

    #[test]
    fn headers_and_cells_present() {
        let bytes = render(&sheets()).unwrap();
        let strings = read_entry(&bytes, "xl/sharedStrings.xml");
        for text in [
            "Activity",
            "Metrics Tracked",
            "Metric",
            "Description",
            "Rowing (Water/Erg)",
            "Caloric Intake",
            "Sleep Latency",
        ] {
            assert!(strings.contains(text), "missing {text}");
        }
        assert!(!strings.contains(">Sheet1<"));
    }

    #[test]
    fn table_content_is_reproducible() {
        let first = render(&sheets()).unwrap();
        let second = render(&sheets()).unwrap();
        for entry in ["xl/sharedStrings.xml", "xl/worksheets/sheet1.xml"] {
            assert_eq!(read_entry(&first, entry), read_entry(&second, entry));
        }
    }
}
