// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::record::{Fixture, TestMatrix};
use crate::{Error, Result};

/// Re-reads a corpus file and checks every recorded rank against a fresh
/// elimination. Returns the number of records checked.
pub fn verify_corpus(path: &Path, dimension: usize) -> Result<usize> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = with_dimension!(dimension, verify_file(path, BufReader::new(file)))?;
    info!("Verified {records} records in {}.", path.display());
    Ok(records)
}

fn verify_file<const N: usize>(path: &Path, reader: impl BufRead) -> Result<usize> {
    verify_records::<N>(reader).map_err(|error| match error {
        Error::Io { source, .. } => Error::Io {
            path: path.to_path_buf(),
            source,
        },
        error => error,
    })
}

/// Checks records read line by line. Line numbers in errors start at 1.
pub fn verify_records<const N: usize>(reader: impl BufRead) -> Result<usize> {
    let mut records = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| Error::Io {
            path: PathBuf::from("<input>"),
            source,
        })?;
        let fixture = line
            .parse::<Fixture<N>>()
            .map_err(|source| Error::Record {
                line: line_number,
                source: Box::new(source),
            })?;
        let computed = TestMatrix::new(fixture.matrix).rank();
        if computed != fixture.rank {
            return Err(Error::RankMismatch {
                line: line_number,
                recorded: fixture.rank,
                computed,
            });
        }
        debug!("Line {line_number}: rank {computed}");
        records += 1;
    }
    Ok(records)
}
