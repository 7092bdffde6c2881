//! Conversion pipeline: read NDR, render LSN/HSN, commit the output.
//!
//! The whole document is rendered into memory and written in one step,
//! so a substitution-label error never leaves a truncated output file
//! behind. Side name-table files are written the same way.
use std::fs::File;
use std::io::{self, BufReader};

use log::info;
use thiserror::Error;

use crate::ndr::{read_ndr, NdrError};
use crate::net::{io as net_io, Net};
use crate::options::Options;
use crate::sn::{write_lsn, write_place_names, write_transition_names, WriteError};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("error open file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Ndr(#[from] NdrError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error("dump error: {0}")]
    Dump(#[from] net_io::IoError),
}

impl ConvertError {
    /// Process exit code for this failure: 2 for file and structural
    /// errors, 3 for bad substitution labels.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Write(WriteError::Label(_)) => 3,
            _ => 2,
        }
    }
}

/// Run one conversion as described by `options`. An input path of `-`
/// reads standard input.
pub fn convert(options: &Options) -> Result<(), ConvertError> {
    let net = read_input(&options.input)?;
    info!(
        "{}: {} places, {} transitions, {} arcs, {} labels",
        options.input,
        net.places.len(),
        net.transitions.len(),
        net.arc_count(),
        net.label_count()
    );

    let document = render_lsn(&net)?;
    commit(&options.output, &document)?;

    if options.name_tables {
        let mut buf = Vec::new();
        write_place_names(&net, &mut buf)?;
        commit(&format!("{}.nmp", options.output), &buf)?;

        let mut buf = Vec::new();
        write_transition_names(&net, &mut buf)?;
        commit(&format!("{}.nmt", options.output), &buf)?;
    }

    if let Some(dump) = &options.dump {
        net_io::write_json(dump, &net)?;
    }
    Ok(())
}

fn read_input(path: &str) -> Result<Net, ConvertError> {
    if path == "-" {
        let stdin = io::stdin();
        Ok(read_ndr(stdin.lock())?)
    } else {
        let file = File::open(path).map_err(|source| ConvertError::Open {
            path: path.to_string(),
            source,
        })?;
        Ok(read_ndr(BufReader::new(file))?)
    }
}

/// Render the full LSN/HSN document into a buffer.
pub fn render_lsn(net: &Net) -> Result<Vec<u8>, WriteError> {
    let mut buf = Vec::new();
    write_lsn(net, &mut buf)?;
    Ok(buf)
}

fn commit(path: &str, content: &[u8]) -> Result<(), ConvertError> {
    std::fs::write(path, content).map_err(|source| ConvertError::Open {
        path: path.to_string(),
        source,
    })
}
