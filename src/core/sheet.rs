/// Header name and description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub description: &'static str,
}

/// A fixed-width record that can be laid out as a sheet row.
///
/// Implemented with `#[derive(SheetRecord)]`, which takes column names from
/// `#[serde(rename = "...")]` and descriptions from field doc comments.
pub trait SheetRecord {
    /// Columns in field declaration order.
    fn columns() -> &'static [Column];

    /// Cell values, one per column.
    fn cells(&self) -> Vec<&str>;

    fn headers() -> Vec<&'static str> {
        Self::columns().iter().map(|c| c.name).collect()
    }
}

/// One named sheet: header row followed by data rows, all as text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<&'static str>>,
}

impl Sheet {
    pub fn from_records<R: SheetRecord>(name: &'static str, records: &'static [R]) -> Self {
        Sheet {
            name,
            headers: R::headers(),
            rows: records.iter().map(|r| r.cells()).collect(),
        }
    }

    /// Header row followed by every data row.
    pub fn lines(&self) -> impl Iterator<Item = &[&'static str]> {
        std::iter::once(self.headers.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }

    /// Width in characters of the widest cell in each column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.headers.len()];
        for line in self.lines() {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}
