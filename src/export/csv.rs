//! CSV rendering of a form's responses

use crate::model::{FieldType, FieldValue, Form, FormField, FormResponse};
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::io;
use std::path::{Path, PathBuf};

/// MIME type of exported files
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Header of the timestamp column
const SUBMITTED_AT_HEADER: &str = "Submitted At";

/// `toLocaleString`-style date and time, e.g. `1/15/2024, 9:30:00 AM`
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// How checkbox answers are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckboxStyle {
    /// `true` / `false`
    #[default]
    Raw,
    /// `✓` / `✗`
    Glyph,
}

impl CheckboxStyle {
    pub fn from_glyphs(glyphs: bool) -> Self {
        if glyphs {
            Self::Glyph
        } else {
            Self::Raw
        }
    }
}

/// A rendered export, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl CsvExport {
    /// Write the export into `dir` under its filename. Path separators in
    /// the filename are replaced so the file always lands directly in `dir`.
    pub fn write_into(&self, dir: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(safe_filename(&self.filename));
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Renders responses as CSV. Every cell is quoted; embedded quotes are doubled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter {
    checkbox_style: CheckboxStyle,
    /// Offset used for timestamps; `None` means the local time zone
    offset: Option<FixedOffset>,
}

impl CsvExporter {
    pub fn new(checkbox_style: CheckboxStyle) -> Self {
        Self {
            checkbox_style,
            offset: None,
        }
    }

    /// Render timestamps at a fixed offset instead of local time
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Filename the export of `form` is saved under
    pub fn filename(form: &Form) -> String {
        format!("{}-responses.csv", form.title)
    }

    pub fn format_timestamp(&self, timestamp: &DateTime<Utc>) -> String {
        let formatted = match self.offset {
            Some(offset) => timestamp.with_timezone(&offset).format(TIMESTAMP_FORMAT),
            None => timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT),
        };
        formatted.to_string()
    }

    /// Text of one cell for `field`, before quoting
    pub fn render_cell(&self, field: &FormField, value: Option<&FieldValue>) -> String {
        render_value(field, value, self.checkbox_style)
    }

    /// Header row then one row per response, in the given order
    pub fn export(&self, form: &Form, responses: &[&FormResponse]) -> String {
        let header = std::iter::once(SUBMITTED_AT_HEADER.to_string())
            .chain(form.fields.iter().map(|f| f.label.clone()));

        let mut rows = vec![join_row(header)];
        rows.extend(responses.iter().map(|response| {
            let cells = std::iter::once(self.format_timestamp(&response.submitted_at)).chain(
                form.fields
                    .iter()
                    .map(|field| self.render_cell(field, response.value(&field.id))),
            );
            join_row(cells)
        }));
        rows.join("\n")
    }

    /// Render the export together with its filename and MIME type
    pub fn export_file(&self, form: &Form, responses: &[&FormResponse]) -> CsvExport {
        CsvExport {
            filename: Self::filename(form),
            mime_type: CSV_MIME_TYPE,
            content: self.export(form, responses),
        }
    }
}

/// Render a submitted value for display. A missing checkbox counts as unchecked
/// when glyphs are used; every other missing value is blank.
pub fn render_value(field: &FormField, value: Option<&FieldValue>, style: CheckboxStyle) -> String {
    match (field.field_type, value, style) {
        (FieldType::Checkbox, value, CheckboxStyle::Glyph) => {
            let glyph = match value {
                Some(FieldValue::Checked(true)) => "✓",
                _ => "✗",
            };
            glyph.to_string()
        }
        (_, Some(value), _) => value.display_value(),
        (_, None, _) => String::new(),
    }
}

/// Single path component: separators and control characters become `_`
fn safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn join_row(cells: impl Iterator<Item = String>) -> String {
    cells.map(|c| quote(&c)).collect::<Vec<_>>().join(",")
}
