//! Batch runner: converts every selected AOP to its own Turtle file
//!
//! Each AOP is processed on its own. A failure is caught at the AOP
//! boundary, written to the run log with its error chain, and the batch
//! moves on to the next AOP. Only problems that stop the batch from
//! starting (output directory, log file) are returned as errors.

use crate::config::Config;
use crate::model::{AopId, EventId};
use crate::pathway::{AdjacencyResolver, AssembledPathway, GraphAssembler};
use crate::tables::{PathwayInput, Tables};
use crate::turtle::{OntologyHeader, SerializeStats, TurtleWriter};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors raised while converting a pathway or running a batch
#[derive(Debug, Error)]
pub enum PathwayError {
    #[error("AOP {0} has no event components")]
    NoComponents(AopId),

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create output directory {}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write log {}", path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for pathway and batch operations
pub type PathwayResult<T> = Result<T, PathwayError>;

/// How one AOP ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathwayOutcome {
    /// Every referenced event had components
    Complete,
    /// Written, but some referenced events had no components
    Partial { missing: Vec<EventId> },
    /// Nothing written; the error followed by its sources
    Failed { error: Vec<String> },
}

impl PathwayOutcome {
    fn failed(err: &dyn std::error::Error) -> Self {
        let mut chain = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        PathwayOutcome::Failed { error: chain }
    }
}

/// Result of one AOP in a batch
#[derive(Debug, Clone, Serialize)]
pub struct PathwayReport {
    pub aop: AopId,
    #[serde(flatten)]
    pub outcome: PathwayOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SerializeStats>,
}

impl PathwayReport {
    /// Log file entry, newline terminated
    pub fn log_entry(&self) -> String {
        match &self.outcome {
            PathwayOutcome::Complete => format!("{}: complete\n", self.aop),
            PathwayOutcome::Partial { missing } => {
                let ids: Vec<String> = missing.iter().map(|e| e.to_string()).collect();
                format!("{}: missing KE(s): [{}]\n", self.aop, ids.join(", "))
            }
            PathwayOutcome::Failed { error } => {
                let mut entry = format!("{}: failed\n", self.aop);
                for line in error {
                    entry.push('\t');
                    entry.push_str(line);
                    entry.push('\n');
                }
                entry
            }
        }
    }
}

/// Outcome of a whole batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub complete: usize,
    pub partial: usize,
    pub failed: usize,
    pub pathways: Vec<PathwayReport>,
}

impl BatchSummary {
    fn new(started_at: DateTime<Utc>, pathways: Vec<PathwayReport>) -> Self {
        let count = |pred: fn(&PathwayOutcome) -> bool| pathways.iter().filter(|p| pred(&p.outcome)).count();
        Self {
            started_at,
            finished_at: Utc::now(),
            complete: count(|o| matches!(o, PathwayOutcome::Complete)),
            partial: count(|o| matches!(o, PathwayOutcome::Partial { .. })),
            failed: count(|o| matches!(o, PathwayOutcome::Failed { .. })),
            pathways,
        }
    }

    /// Closing line of the run log
    pub fn results_line(&self) -> String {
        format!(
            "Results: {} complete, {} have missing components, {} failed",
            self.complete, self.partial, self.failed
        )
    }
}

/// A pathway written to disk
#[derive(Debug)]
pub struct ConvertedPathway {
    pub pathway: AssembledPathway,
    pub path: PathBuf,
    pub stats: SerializeStats,
}

/// Converts AOPs according to a configuration
pub struct BatchRunner<'c> {
    config: &'c Config,
    assembler: GraphAssembler,
}

impl<'c> BatchRunner<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            assembler: GraphAssembler::new(AdjacencyResolver::new(config.ordering)),
        }
    }

    /// AOPs to process: the configured list, else every AOP in the tables
    pub fn selected_aops(&self, tables: &Tables) -> Vec<AopId> {
        if self.config.aops.is_empty() {
            tables.aop_ids()
        } else {
            self.config.aops.clone()
        }
    }

    /// Assemble one pathway without writing it
    pub fn assemble(&self, input: &PathwayInput<'_>) -> PathwayResult<AssembledPathway> {
        if input.components.is_empty() {
            return Err(PathwayError::NoComponents(input.aop));
        }
        Ok(self.assembler.assemble(
            input.aop,
            input.components.iter().copied(),
            input.relationships.iter().copied(),
        ))
    }

    /// Header for an assembled pathway
    pub fn header(&self, input: &PathwayInput<'_>, pathway: &AssembledPathway) -> OntologyHeader {
        OntologyHeader::new(input.aop, input.title(&pathway.order.order))
            .with_model_base(&self.config.ontology.model_base)
            .with_model_state(&self.config.ontology.model_state)
    }

    /// Assemble one pathway and write its Turtle file
    pub fn convert(&self, input: &PathwayInput<'_>) -> PathwayResult<ConvertedPathway> {
        let pathway = self.assemble(input)?;
        let header = self.header(input, &pathway);
        let path = self.config.output.model_path(input.aop);

        let write_err = |source| PathwayError::Write {
            path: path.clone(),
            source,
        };
        let file = File::create(&path).map_err(write_err)?;
        let stats = TurtleWriter::new(BufWriter::new(file), &pathway)
            .write(&header)
            .map_err(write_err)?;

        Ok(ConvertedPathway { pathway, path, stats })
    }

    /// Convert every selected AOP, writing the run log as it goes
    pub fn run(&self, tables: &Tables) -> PathwayResult<BatchSummary> {
        let started_at = Utc::now();
        let directory = &self.config.output.directory;
        std::fs::create_dir_all(directory).map_err(|source| PathwayError::OutputDir {
            path: directory.clone(),
            source,
        })?;

        let log_path = self.config.output.log_path();
        let mut log = RunLog::create(&log_path)?;

        let aops = self.selected_aops(tables);
        info!(aops = aops.len(), directory = %directory.display(), "starting batch");

        let mut pathways = Vec::with_capacity(aops.len());
        for aop in aops {
            let report = self.run_one(&tables.pathway(aop));
            log.append(&report.log_entry())?;
            pathways.push(report);
        }

        let summary = BatchSummary::new(started_at, pathways);
        log.append(&format!("{}\n", summary.results_line()))?;
        info!("{}", summary.results_line());
        Ok(summary)
    }

    fn run_one(&self, input: &PathwayInput<'_>) -> PathwayReport {
        match self.convert(input) {
            Ok(converted) => {
                for conflict in &converted.pathway.order.conflicts {
                    warn!(
                        aop = %input.aop,
                        event = %conflict.event,
                        ignored = %conflict.ignored,
                        "successor conflict"
                    );
                }
                let outcome = if converted.pathway.is_complete() {
                    info!(aop = %input.aop, path = %converted.path.display(), "complete");
                    PathwayOutcome::Complete
                } else {
                    info!(
                        aop = %input.aop,
                        missing = converted.pathway.missing.len(),
                        "written with missing key events"
                    );
                    PathwayOutcome::Partial {
                        missing: converted.pathway.missing.clone(),
                    }
                };
                PathwayReport {
                    aop: input.aop,
                    outcome,
                    output: Some(converted.path),
                    stats: Some(converted.stats),
                }
            }
            Err(e) => {
                error!(aop = %input.aop, error = %e, "pathway failed");
                PathwayReport {
                    aop: input.aop,
                    outcome: PathwayOutcome::failed(&e),
                    output: None,
                    stats: None,
                }
            }
        }
    }
}

/// Append-only run log, flushed after every entry
struct RunLog {
    path: PathBuf,
    out: BufWriter<File>,
}

impl RunLog {
    fn create(path: &Path) -> PathwayResult<Self> {
        let file = File::create(path).map_err(|source| PathwayError::Log {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
        })
    }

    fn append(&mut self, entry: &str) -> PathwayResult<()> {
        self.out
            .write_all(entry.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|source| PathwayError::Log {
                path: self.path.clone(),
                source,
            })
    }
}
