//! Document renderers.

mod csv;
mod pdf;

pub use self::csv::CsvPostExporter;
pub use self::pdf::PrintPdfRenderer;
