//! Response export

mod csv;

pub use csv::{render_value, CheckboxStyle, CsvExport, CsvExporter, CSV_MIME_TYPE};
