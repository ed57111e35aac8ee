// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info, trace};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::GeneratorConfig;
use crate::plan::CorpusPlan;
use crate::record::TestMatrix;
use crate::synthesis::Synthesizer;
use crate::{Error, Result};

/// Counts of what a run wrote, with ranks binned the way GF(2) rank tests
/// bin them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CorpusSummary {
    pub dimension: usize,
    pub records: usize,
    /// Number of records of each rank `0..=dimension`.
    pub rank_counts: Vec<usize>,
}

impl CorpusSummary {
    fn new(dimension: usize) -> Self {
        Self {
            dimension,
            records: 0,
            rank_counts: vec![0; dimension + 1],
        }
    }

    fn add(&mut self, rank: usize) {
        self.records += 1;
        self.rank_counts[rank] += 1;
    }

    #[must_use]
    pub fn full_rank(&self) -> usize {
        self.rank_counts[self.dimension]
    }

    #[must_use]
    pub fn one_below_full(&self) -> usize {
        self.dimension
            .checked_sub(1)
            .map_or(0, |rank| self.rank_counts[rank])
    }

    #[must_use]
    pub fn lower(&self) -> usize {
        self.records - self.full_rank() - self.one_below_full()
    }
}

impl Display for CorpusSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records: {} full rank, {} one below full rank, {} lower",
            self.records,
            self.full_rank(),
            self.one_below_full(),
            self.lower()
        )
    }
}

/// Runs a [`CorpusPlan`], writing one record per generated matrix in plan
/// order. Nothing is kept in memory past the record being written.
pub struct CorpusDriver<R = StdRng> {
    plan: CorpusPlan,
    synthesizer: Synthesizer<R>,
}

impl<R: Rng> CorpusDriver<R> {
    pub fn new(plan: CorpusPlan, synthesizer: Synthesizer<R>) -> Self {
        Self { plan, synthesizer }
    }

    #[must_use]
    pub fn plan(&self) -> &CorpusPlan {
        &self.plan
    }

    pub fn write_records<const N: usize>(
        &mut self,
        writer: &mut impl Write,
    ) -> std::io::Result<CorpusSummary> {
        let mut summary = CorpusSummary::new(N);
        for entry in self.plan.entries() {
            info!("Generating {} {}.", entry.count, entry.strategy);
            for index in 0..entry.count {
                let record = TestMatrix::new(self.synthesizer.generate::<N>(entry.strategy));
                trace!("{} #{index}: rank {}", entry.strategy, record.rank());
                writeln!(writer, "{record}")?;
                summary.add(record.rank());
            }
        }
        Ok(summary)
    }

    /// Truncates `path` and streams the corpus into it. Records flushed before
    /// a failure stay on disk.
    pub fn write_file<const N: usize>(&mut self, path: &Path) -> Result<CorpusSummary> {
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        let summary = self.write_records::<N>(&mut writer).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
        debug!("Wrote {} records to {}", summary.records, path.display());
        Ok(summary)
    }
}

/// Generates the corpus described by `config`. The plan is validated before
/// the output file is touched.
pub fn generate_corpus(config: &GeneratorConfig) -> Result<CorpusSummary> {
    let plan = config.plan()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "Writing {} matrices of dimension {} to {} with seed {seed}.",
        plan.record_count(),
        config.dimension,
        config.output.display()
    );
    let mut driver = CorpusDriver::new(plan, Synthesizer::seeded(seed));
    let summary = with_dimension!(config.dimension, write_corpus(&mut driver, &config.output))?;
    info!("{summary}");
    Ok(summary)
}

fn write_corpus<const N: usize>(driver: &mut CorpusDriver, path: &Path) -> Result<CorpusSummary> {
    driver.write_file::<N>(path)
}
