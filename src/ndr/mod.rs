//! NDR input side: line tokenizer and the net reader.

pub mod reader;
pub mod scan;

pub use reader::{read_ndr, NdrError, MAX_LINE_LEN};
