//! Delimited file adapter
//!
//! Reads a whole file into a [`Table`](crate::domain::Table) and writes one
//! back. Standard double-quote quoting is honoured in both directions.

pub mod reader;
pub mod writer;

pub use reader::read_table;
pub use writer::write_table;
