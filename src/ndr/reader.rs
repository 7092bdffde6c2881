//! Line-oriented NDR reader.
//!
//! Each line is dispatched on its first non-blank character: `p` and `t`
//! declare entities, `e` declares an arc, `h` names the net, `#` in
//! column one is a comment. Anything else is ignored, as are blank
//! lines. The reader keeps no state between lines beyond the net under
//! construction.
use std::io::BufRead;

use log::debug;
use thiserror::Error;

use crate::ndr::scan::{skip_space, skip_token, take_name, parse_int, trailing_weight};
use crate::net::{Net, Place, Transition};

/// Substitution labels arrive as `{*HSN(` … `)}`; only the first six
/// characters are tested, the rest of the token is not verified.
const HSN_PREFIX: &str = "{*HSN(";

/// NDR readers traditionally work in a fixed 1024-byte line buffer.
/// Anything longer is rejected rather than silently split.
pub const MAX_LINE_LEN: usize = 1024;

#[derive(Debug, Error)]
pub enum NdrError {
    #[error("duplicate name: {0}")]
    DuplicateName(String),
    #[error("unknown arc: {src} -> {target}")]
    UnknownArc { src: String, target: String },
    #[error("line {0} exceeds {MAX_LINE_LEN} bytes")]
    LineTooLong(usize),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a whole NDR document into a [`Net`].
pub fn read_ndr<R: BufRead>(input: R) -> Result<Net, NdrError> {
    let mut net = Net::empty();
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.len() > MAX_LINE_LEN {
            return Err(NdrError::LineTooLong(idx + 1));
        }
        read_line(&line, &mut net)?;
    }
    debug!(
        "NDR read: {} places, {} transitions, {} arcs, {} labels",
        net.places.len(),
        net.transitions.len(),
        net.arc_count(),
        net.label_count()
    );
    Ok(net)
}

fn read_line(line: &str, net: &mut Net) -> Result<(), NdrError> {
    // Only a `#` in the very first column makes a comment.
    if line.starts_with('#') {
        return Ok(());
    }
    let mut pos = 0;
    skip_space(line, &mut pos);
    if pos == line.len() {
        return Ok(());
    }
    let tag = line.as_bytes()[pos];
    pos += 1;
    match tag {
        b'p' => read_place(line, pos, net),
        b't' => read_transition(line, pos, net),
        b'e' => read_arc(line, pos, net),
        b'h' => {
            skip_space(line, &mut pos);
            let name = take_name(line, &mut pos);
            debug!("net name: {name}");
            net.name = Some(name.to_string());
            Ok(())
        }
        _ => Ok(()),
    }
}

/// `p <x> <y> <name> <marking> …` — coordinates are skipped unread.
fn read_place(line: &str, mut pos: usize, net: &mut Net) -> Result<(), NdrError> {
    skip_space(line, &mut pos);
    skip_token(line, &mut pos); // x
    skip_space(line, &mut pos);
    skip_token(line, &mut pos); // y
    skip_space(line, &mut pos);
    let name = take_name(line, &mut pos);
    if net.contains_name(name) {
        return Err(NdrError::DuplicateName(name.to_string()));
    }
    skip_space(line, &mut pos);
    let tokens = parse_int(&line[pos..]);
    net.add_place(Place::new(name, tokens));
    Ok(())
}

/// `t <x> <y> <name> <anchor> <eft> <lft> <anchor> <label>` — only the
/// name and the trailing label field matter.
fn read_transition(line: &str, mut pos: usize, net: &mut Net) -> Result<(), NdrError> {
    skip_space(line, &mut pos);
    skip_token(line, &mut pos); // x
    skip_space(line, &mut pos);
    skip_token(line, &mut pos); // y
    skip_space(line, &mut pos);
    let name = take_name(line, &mut pos).to_string();
    if net.contains_name(&name) {
        return Err(NdrError::DuplicateName(name));
    }
    for _ in 0..4 {
        // anchor, eft, lft, anchor
        skip_space(line, &mut pos);
        skip_token(line, &mut pos);
    }
    skip_space(line, &mut pos);
    let field = take_name(line, &mut pos);
    let transition = match strip_hsn_wrapper(field) {
        Some(label) => Transition::new_with_label(name, label),
        None => Transition::new(name),
    };
    net.add_transition(transition);
    Ok(())
}

/// Strip `{*HSN(` and the closing `)}` from a captured label field.
/// Everything that does not start with the marker is an ordinary label
/// and is discarded.
fn strip_hsn_wrapper(field: &str) -> Option<&str> {
    let body = field.strip_prefix(HSN_PREFIX)?;
    // Drop the closing `)}`: the last two characters, unverified.
    let mut chars = body.chars();
    chars.next_back();
    chars.next_back();
    Some(chars.as_str())
}

/// `e <name1> [rad] [ang] <name2> … <weight> <anchor>` — the arc kind is
/// inferred from which endpoint resolves to a place vs. a transition.
fn read_arc(line: &str, mut pos: usize, net: &mut Net) -> Result<(), NdrError> {
    skip_space(line, &mut pos);
    let name1 = take_name(line, &mut pos).to_string();
    skip_space(line, &mut pos);
    if line.as_bytes().get(pos).is_some_and(u8::is_ascii_digit) {
        skip_token(line, &mut pos); // rad
    }
    skip_space(line, &mut pos);
    if line.as_bytes().get(pos).is_some_and(u8::is_ascii_digit) {
        skip_token(line, &mut pos); // ang
    }
    skip_space(line, &mut pos);
    let name2 = take_name(line, &mut pos).to_string();
    let weight = trailing_weight(line);

    let unknown = || NdrError::UnknownArc {
        src: name1.clone(),
        target: name2.clone(),
    };
    if let Some(place) = net.place_by_name(&name1) {
        let transition = net.transition_by_name(&name2).ok_or_else(unknown)?;
        net.add_input_arc(place, transition, weight);
    } else {
        let source = net.transition_by_name(&name1).ok_or_else(unknown)?;
        if let Some(place) = net.place_by_name(&name2) {
            net.add_output_arc(source, place, weight);
        } else {
            let target = net.transition_by_name(&name2).ok_or_else(unknown)?;
            net.add_priority_arc(source, target);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{PlaceId, TransitionId};

    fn read(text: &str) -> Result<Net, NdrError> {
        read_ndr(text.as_bytes())
    }

    #[test]
    fn small_net() {
        let net = read(
            "# a comment\n\
             p 100 100 P0 2\n\
             p 160 100 P1 0\n\
             t 130 100 T0 0 w n n\n\
             e P0 T0 1 n\n\
             e T0 P1 1 n\n\
             h demo\n",
        )
        .unwrap();
        assert_eq!(net.places.len(), 2);
        assert_eq!(net.transitions.len(), 1);
        assert_eq!(net.input_arcs.len(), 1);
        assert_eq!(net.output_arcs.len(), 1);
        assert_eq!(net.name.as_deref(), Some("demo"));
        assert_eq!(net.places[PlaceId::new(0)].tokens, 2);
        assert_eq!(net.places[PlaceId::new(1)].tokens, 0);
    }

    #[test]
    fn blank_and_unknown_lines_are_ignored() {
        let net = read("\n   \nq whatever\np 0 0 P0 0\n").unwrap();
        assert_eq!(net.places.len(), 1);
    }

    #[test]
    fn comment_needs_column_one() {
        // An indented `#` is not a comment; the `#` tag is simply ignored.
        let net = read("  # p 0 0 P0 0\n").unwrap();
        assert_eq!(net.places.len(), 0);
    }

    #[test]
    fn duplicate_place_name() {
        let err = read("p 0 0 P0 0\np 1 1 P0 0\n").unwrap_err();
        assert!(matches!(err, NdrError::DuplicateName(name) if name == "P0"));
    }

    #[test]
    fn place_and_transition_share_a_namespace() {
        let err = read("p 0 0 X 0\nt 1 1 X 0 w n n\n").unwrap_err();
        assert!(matches!(err, NdrError::DuplicateName(name) if name == "X"));
    }

    #[test]
    fn arc_classification() {
        let net = read(
            "p 0 0 P0 0\n\
             t 1 1 T0 0 w n n\n\
             t 2 2 T1 0 w n n\n\
             e P0 T0 1 n\n\
             e T0 P0 2 n\n\
             e T0 T1 0 n\n",
        )
        .unwrap();
        assert_eq!(net.input_arcs.len(), 1);
        assert_eq!(net.output_arcs.len(), 1);
        assert_eq!(net.priority_arcs.len(), 1);
        assert_eq!(net.input_arcs[0].place, PlaceId::new(0));
        assert_eq!(net.output_arcs[0].weight, 2);
        assert_eq!(net.priority_arcs[0].target, TransitionId::new(1));
    }

    #[test]
    fn arc_with_radius_and_angle_tokens() {
        let net = read(
            "p 0 0 P0 0\n\
             t 1 1 T0 0 w n n\n\
             e P0 45 90 T0 3 n\n",
        )
        .unwrap();
        assert_eq!(net.input_arcs[0].weight, 3);
    }

    #[test]
    fn unknown_arc_endpoint() {
        let err = read("p 0 0 P0 0\ne P0 T9 1 n\n").unwrap_err();
        match err {
            NdrError::UnknownArc { src, target } => {
                assert_eq!(src, "P0");
                assert_eq!(target, "T9");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn arc_between_two_unknown_names() {
        let err = read("e A B 1 n\n").unwrap_err();
        assert!(matches!(err, NdrError::UnknownArc { .. }));
    }

    #[test]
    fn hsn_label_is_captured_and_stripped() {
        let net = read(
            "p 0 0 P0 0\n\
             t 1 1 T0 0 w n n {*HSN(Sub i P0 3)}\n",
        )
        .unwrap();
        let labels: Vec<_> = net.labelled_transitions().collect();
        assert_eq!(labels, vec![(TransitionId::new(0), "Sub i P0 3")]);
    }

    #[test]
    fn ordinary_labels_are_discarded() {
        let net = read("t 1 1 T0 0 w n n mylabel\n").unwrap();
        assert_eq!(net.label_count(), 0);
    }

    #[test]
    fn braced_names_keep_their_spelling() {
        let net = read(
            "p 0 0 {a b} 1\n\
             t 1 1 T0 0 w n n\n\
             e {a b} T0 1 n\n",
        )
        .unwrap();
        assert_eq!(net.places[PlaceId::new(0)].name, "{a b}");
        assert_eq!(net.input_arcs.len(), 1);
    }

    #[test]
    fn last_net_name_wins() {
        let net = read("h one\nh two\n").unwrap();
        assert_eq!(net.name.as_deref(), Some("two"));
    }

    #[test]
    fn marking_defaults_to_zero_on_garbage() {
        let net = read("p 0 0 P0 xyz\n").unwrap();
        assert_eq!(net.places[PlaceId::new(0)].tokens, 0);
    }

    #[test]
    fn overlong_line_is_fatal() {
        let long = format!("p 0 0 {} 0\n", "x".repeat(MAX_LINE_LEN + 1));
        let err = read(&long).unwrap_err();
        assert!(matches!(err, NdrError::LineTooLong(1)));
    }
}
