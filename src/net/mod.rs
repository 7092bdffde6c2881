//! In-memory model of a place/transition net as read from NDR.
//!
//! Places and transitions live in strongly-typed tables indexed by
//! [`PlaceId`] and [`TransitionId`]; ids are dense and assigned in order
//! of first appearance. Arcs are kept in three separate buckets, one per
//! kind, each preserving declaration order:
//!
//! * place → transition (regular input arcs);
//! * transition → place (output arcs, weight written as stored);
//! * transition → transition (priority arcs, weight fixed at zero).
//!
//! A transition may carry a raw substitution-label string captured from
//! its NDR declaration; the label is not interpreted until write time.

pub mod core;
pub mod ids;
pub mod index_vec;
pub mod io;
pub mod structure;

pub use core::Net;
pub use ids::{PlaceId, TransitionId};
pub use index_vec::{Idx, IndexVec};
pub use structure::{InputArc, OutputArc, Place, PriorityArc, Transition, Weight};
