//! HSN substitution-label processing.
//!
//! A captured label string is its own little language: a subnet name
//! followed by any number of `(type, host place, local index)` triples,
//! tokenized with the same rules as NDR names. Each triple resolves to a
//! signed pair `(v1, v2)` that tells the consumer how a host place is
//! merged with a place of the subnet.
use thiserror::Error;

use crate::ndr::scan::{parse_int, skip_space, take_name};
use crate::net::{Net, PlaceId};

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("invalid HSN label place name {0}")]
    UnknownPlace(String),
    #[error("invalid HSN label place type {0}")]
    BadPlaceType(String),
}

/// How a host place is merged with a local place of the subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeKind {
    Input,
    Output,
    Start,
    Finish,
}

impl MergeKind {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "i" => Some(Self::Input),
            "o" => Some(Self::Output),
            "s" => Some(Self::Start),
            "f" => Some(Self::Finish),
            _ => None,
        }
    }
}

/// One resolved place-mapping directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    pub kind: MergeKind,
    pub place: PlaceId,
    pub local: i64,
}

impl Merge {
    /// Signed-pair encoding: the host place id carries the sign for
    /// `s`/`f`, the local index for `o`/`f`.
    pub fn encode(&self) -> (i64, i64) {
        let hp = self.place.number();
        let lp = self.local;
        match self.kind {
            MergeKind::Input => (hp, lp),
            MergeKind::Output => (hp, -lp),
            MergeKind::Start => (-hp, lp),
            MergeKind::Finish => (-hp, -lp),
        }
    }
}

/// A fully parsed substitution label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub subnet: String,
    pub merges: Vec<Merge>,
}

/// Parse one label string against the net it belongs to. Host place
/// names must already exist; directives keep label order.
pub fn parse_label(text: &str, net: &Net) -> Result<Substitution, LabelError> {
    let mut pos = 0;
    skip_space(text, &mut pos);
    let subnet = take_name(text, &mut pos).to_string();
    let mut merges = Vec::new();
    loop {
        skip_space(text, &mut pos);
        if pos == text.len() {
            break;
        }
        let kind_token = take_name(text, &mut pos);
        skip_space(text, &mut pos);
        let host = take_name(text, &mut pos);
        skip_space(text, &mut pos);
        let local = parse_int(take_name(text, &mut pos));
        // The host place is resolved before the type tag is checked, so
        // a label wrong in both ways reports the place name.
        let place = net
            .place_by_name(host)
            .ok_or_else(|| LabelError::UnknownPlace(host.to_string()))?;
        let kind = MergeKind::from_token(kind_token)
            .ok_or_else(|| LabelError::BadPlaceType(kind_token.to_string()))?;
        merges.push(Merge { kind, place, local });
    }
    Ok(Substitution { subnet, merges })
}
