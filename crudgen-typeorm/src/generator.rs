//! The orchestrator: turns a validated schema into files on disk.

use std::path::Path;

use crudgen_core::{File, WriteResult};

use crate::error::{Error, Result};
use crate::plan::plan;
use crate::schema::ModuleSchema;
use crate::templates::TemplateRegistry;

/// A rendered file for preview (dry runs).
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
}

/// Summary of one generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Paths written this run, in plan order.
    pub written: Vec<String>,
    /// Generate-once paths left untouched because they already existed.
    pub skipped: Vec<String>,
}

/// CRUD module generator.
///
/// Holds the schema by reference: every render job reads the same data, so
/// all generated artifacts agree on naming and field lists.
pub struct Generator<'a> {
    schema: &'a ModuleSchema,
    registry: TemplateRegistry,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a ModuleSchema) -> Result<Self> {
        Ok(Self {
            schema,
            registry: TemplateRegistry::new()?,
        })
    }

    /// Render every job without touching the filesystem.
    pub fn preview(&self, base: &Path) -> Result<Vec<PreviewFile>> {
        plan(self.schema, base)
            .into_iter()
            .map(|job| {
                let content = self.registry.render(job.template, self.schema)?;
                Ok(PreviewFile {
                    path: job.path,
                    content,
                })
            })
            .collect()
    }

    /// Render and write every job, strictly sequential and fail-fast.
    ///
    /// The first failure aborts the remaining jobs; files already written
    /// stay on disk. There is no rollback.
    pub fn generate(&self, base: &Path) -> Result<GenerateReport> {
        let mut report = GenerateReport::default();

        for job in plan(self.schema, base) {
            let content = self.registry.render(job.template, self.schema)?;
            let file = File::new(base.join(&job.path), content).with_rules(job.rules);

            let result = file.write().map_err(|source| Error::Write {
                path: file.path().to_path_buf(),
                source,
            })?;

            match result {
                WriteResult::Written => report.written.push(job.path),
                WriteResult::Skipped => report.skipped.push(job.path),
            }
        }

        Ok(report)
    }
}
