//! SN output side: substitution-label resolution and the LSN writer.

pub mod labels;
pub mod writer;

pub use labels::{parse_label, LabelError, Merge, MergeKind, Substitution};
pub use writer::{write_lsn, write_place_names, write_transition_names, WriteError};
