// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::plan::Family;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    #[error("{family} schedule has {steps} step values but {counts} counts")]
    #[diagnostic(code("TestMatrices.ConfigMismatch"))]
    #[diagnostic(help("every step value needs exactly one matching count"))]
    ConfigMismatch {
        family: Family,
        steps: usize,
        counts: usize,
    },
    #[error("matrix dimension {dimension} is not supported")]
    #[diagnostic(code("TestMatrices.UnsupportedDimension"))]
    #[diagnostic(help("supported dimensions are 8, 16, 32, 64 and 128"))]
    UnsupportedDimension { dimension: usize },
    #[error("could not read configuration file {path}")]
    #[diagnostic(code("TestMatrices.ConfigRead"))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration file {path}")]
    #[diagnostic(code("TestMatrices.ConfigParse"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O failure on {path}")]
    #[diagnostic(code("TestMatrices.Io"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("matrix violates its fixed shape")]
    #[diagnostic(code("TestMatrices.DomainViolation"))]
    DomainViolation(#[from] bitrank::Error),
    #[error("malformed test matrix record: {0}")]
    #[diagnostic(code("TestMatrices.Parse"))]
    Parse(String),
    #[error("corpus line {line} is not a valid record")]
    #[diagnostic(code("TestMatrices.Record"))]
    Record {
        line: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("corpus line {line} records rank {recorded}, but the matrix has rank {computed}")]
    #[diagnostic(code("TestMatrices.RankMismatch"))]
    RankMismatch {
        line: usize,
        recorded: usize,
        computed: usize,
    },
}
