//! Presentation renderers over projection output
//!
//! Every renderer takes the display currency and the calendar year of the
//! first record explicitly.

pub mod table;
pub mod chart;
pub mod export;
pub mod print;

pub use table::{format_growth, render_table, table_rows, TableRow, TABLE_HEADERS};
pub use chart::{render_ascii, ChartSpec, Series};
pub use export::{export_csv, to_csv_string, write_csv, DEFAULT_EXPORT_FILE};
pub use print::render_print_document;
