//! TypeORM + Express CRUD module generator.
//!
//! Given a table name and its string/numeric column names, this crate renders
//! a complete CRUD module (entity, DTOs, repository interface and TypeORM
//! implementation, services, Joi validators, Express controller) into the
//! conventional `src/modules/<camelName>/` layout, plus a shared
//! `AppError.ts` that is generated once and never overwritten.
//!
//! # Usage
//!
//! This crate is used internally by the `crudgen` CLI. You typically don't
//! need to use it directly.
//!
//! ```ignore
//! use crudgen_typeorm::{Generator, ModuleSchema};
//! use std::path::Path;
//!
//! let schema = ModuleSchema::build("user", Some("description,oi"), Some("code,test"))?;
//! let generator = Generator::new(&schema)?;
//!
//! // Preview files without writing
//! let files = generator.preview(Path::new("."))?;
//!
//! // Generate files to disk
//! let report = generator.generate(Path::new("."))?;
//! ```

mod error;
mod generator;
mod plan;
mod schema;

pub mod templates;

pub use error::{Error, Result};
pub use generator::{GenerateReport, Generator, PreviewFile};
pub use plan::{plan, RenderJob, APP_ERROR_PATH};
pub use schema::{FieldNames, ModuleSchema};
