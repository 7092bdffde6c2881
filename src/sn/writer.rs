//! LSN/HSN serialization.
//!
//! The output is newline-delimited, comments prefixed with `;`, in a
//! fixed section order: summary, the three arc sections, markings,
//! substitution sections (when any transition carries a label), the two
//! name tables, end marker.
use std::io::Write;

use log::debug;
use thiserror::Error;

use crate::net::Net;
use crate::sn::labels::{parse_label, LabelError};

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Label(#[from] LabelError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize the whole net in LSN/HSN form.
pub fn write_lsn<W: Write>(net: &Net, out: &mut W) -> Result<(), WriteError> {
    let marked = net.marked_place_count();
    let labels = net.label_count();

    writeln!(out, "; LSN obtained from NDR")?;
    writeln!(out, "; m n narcs nnmu, nst")?;
    writeln!(
        out,
        "{} {} {} {} {}",
        net.places.len(),
        net.transitions.len(),
        net.arc_count(),
        marked,
        labels
    )?;

    writeln!(out, "; p->t: p t w")?;
    for arc in &net.input_arcs {
        // Non-positive input weights denote an inhibitor arc; the
        // encoding collapses them to the -1 sentinel.
        let weight = if arc.weight > 0 { arc.weight } else { -1 };
        writeln!(
            out,
            "{} {} {}",
            arc.place.number(),
            arc.transition.number(),
            weight
        )?;
    }

    writeln!(out, "; t->p: -p t w")?;
    for arc in &net.output_arcs {
        // The t→p weight is written as stored, zero and negative included.
        writeln!(
            out,
            "{} {} {}",
            -arc.place.number(),
            arc.transition.number(),
            arc.weight
        )?;
    }

    writeln!(out, "; t->t: -t1 -t2 0")?;
    for arc in &net.priority_arcs {
        writeln!(out, "{} {} 0", -arc.source.number(), -arc.target.number())?;
    }

    writeln!(out, "; mu(p):")?;
    for (id, place) in net.places.iter_enumerated() {
        if place.tokens > 0 {
            writeln!(out, "{} {}", id.number(), place.tokens)?;
        }
    }

    if labels > 0 {
        write_substitutions(net, out)?;
    }

    writeln!(out, "; Table of places")?;
    writeln!(out, "; no name")?;
    write_place_names(net, out)?;

    writeln!(out, "; Table of transitions")?;
    writeln!(out, "; no name")?;
    write_transition_names(net, out)?;

    writeln!(out, "; end of LSN")?;
    debug!("wrote LSN: {} arcs, {} labels", net.arc_count(), labels);
    Ok(())
}

/// One section per labelled transition, in label capture order.
fn write_substitutions<W: Write>(net: &Net, out: &mut W) -> Result<(), WriteError> {
    for (id, label) in net.labelled_transitions() {
        let substitution = parse_label(label, net)?;
        writeln!(out, "; HSN substitution transition: t nmp subnet")?;
        writeln!(
            out,
            "{} {} {}",
            id.number(),
            substitution.merges.len(),
            substitution.subnet
        )?;
        writeln!(out, "; HSN place mapping: hp lp")?;
        for merge in &substitution.merges {
            let (v1, v2) = merge.encode();
            writeln!(out, "{v1} {v2}")?;
        }
    }
    Ok(())
}

/// Place name table, one comment line per place in id order. Also the
/// payload of the `.nmp` side file.
pub fn write_place_names<W: Write>(net: &Net, out: &mut W) -> Result<(), WriteError> {
    for (id, place) in net.places.iter_enumerated() {
        writeln!(out, "; {} {}", id.number(), place.name)?;
    }
    Ok(())
}

/// Transition name table; payload of the `.nmt` side file.
pub fn write_transition_names<W: Write>(net: &Net, out: &mut W) -> Result<(), WriteError> {
    for (id, transition) in net.transitions.iter_enumerated() {
        writeln!(out, "; {} {}", id.number(), transition.name)?;
    }
    Ok(())
}
