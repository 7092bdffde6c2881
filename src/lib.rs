//! NDR to LSN/HSN net converter.
//!
//! Reads a textual Petri-net description in NDR form, builds a typed net
//! model with duplicate-name detection and arc-role inference, and
//! serializes it as compact numeric LSN (HSN when transitions carry
//! substitution labels), with the name tables preserved as comments.

pub mod convert;
pub mod ndr;
pub mod net;
pub mod options;
pub mod sn;

pub use convert::{convert, ConvertError};
pub use options::Options;
