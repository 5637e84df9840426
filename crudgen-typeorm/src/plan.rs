//! The fixed render plan for one CRUD module.

use std::path::Path;

use crudgen_core::FileRules;

use crate::schema::ModuleSchema;
use crate::templates::ids;

/// Repo-relative path of the shared error type. It is generated only when
/// absent and never overwritten afterwards, so hand edits survive.
pub const APP_ERROR_PATH: &str = "src/shared/errors/AppError.ts";

/// One (template, target path) unit of work producing exactly one file.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub template: &'static str,
    /// Target path relative to the project root.
    pub path: String,
    pub rules: FileRules,
}

impl RenderJob {
    fn new(template: &'static str, path: String) -> Self {
        Self {
            template,
            path,
            rules: FileRules::default(),
        }
    }
}

/// Build the ordered job list for `schema`, targets rooted at `base`.
///
/// The shared AppError job is issued only when the file is absent under
/// `base`. Every other job unconditionally (re)writes its target: repeated
/// runs are idempotent for identical input, destructive for local edits to
/// generated files. Order is fixed and only matters for human review of
/// diffs; each job targets a distinct path.
pub fn plan(schema: &ModuleSchema, base: &Path) -> Vec<RenderJob> {
    let module = format!("src/modules/{}", schema.name_camel);
    let name = &schema.name_pascal;

    let mut jobs = Vec::with_capacity(16);

    if !base.join(APP_ERROR_PATH).exists() {
        jobs.push(RenderJob {
            template: ids::APP_ERROR,
            path: APP_ERROR_PATH.to_string(),
            rules: FileRules::create_once(),
        });
    }

    jobs.push(RenderJob::new(
        ids::ENTITY,
        format!("{module}/infra/http/typeorm/entities/{name}.ts"),
    ));

    jobs.push(RenderJob::new(
        ids::DTO_INTERFACE,
        format!("{module}/dtos/I{name}DTO.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::DTO_CREATE,
        format!("{module}/dtos/I{name}CreateDTO.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::DTO_UPDATE,
        format!("{module}/dtos/I{name}UpdateDTO.ts"),
    ));

    jobs.push(RenderJob::new(
        ids::REPOSITORY_INTERFACE,
        format!("{module}/repositories/I{name}Repository.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::REPOSITORY_TYPEORM,
        format!("{module}/infra/http/typeorm/repositories/{name}Repository.ts"),
    ));

    jobs.push(RenderJob::new(
        ids::SERVICE_CREATE,
        format!("{module}/services/Create{name}Service.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::SERVICE_GET_BY_ID,
        format!("{module}/services/GetById{name}Service.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::SERVICE_GET_ALL,
        format!("{module}/services/GetAll{name}Service.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::SERVICE_UPDATE,
        format!("{module}/services/Update{name}Service.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::SERVICE_REMOVE,
        format!("{module}/services/Remove{name}Service.ts"),
    ));

    jobs.push(RenderJob::new(
        ids::VALIDATOR_CREATE,
        format!("{module}/common/validations/create{name}Validator.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::VALIDATOR_UPDATE,
        format!("{module}/common/validations/update{name}Validator.ts"),
    ));
    jobs.push(RenderJob::new(
        ids::VALIDATOR_GET_ALL,
        format!("{module}/common/validations/getAll{name}Validator.ts"),
    ));

    jobs.push(RenderJob::new(
        ids::CONTROLLER,
        format!("{module}/http/controllers/{name}Controller.ts"),
    ));

    jobs
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crudgen_core::Overwrite;
    use tempfile::TempDir;

    use super::*;

    fn user_schema() -> ModuleSchema {
        ModuleSchema::build("user", Some("description,oi"), Some("code,test")).unwrap()
    }

    #[test]
    fn test_sixteen_jobs_on_a_clean_tree() {
        let temp = TempDir::new().unwrap();
        let jobs = plan(&user_schema(), temp.path());

        assert_eq!(jobs.len(), 16);
        assert_eq!(jobs[0].path, APP_ERROR_PATH);
        assert_eq!(jobs[0].rules.overwrite, Overwrite::IfMissing);
        assert_eq!(
            jobs[1].path,
            "src/modules/user/infra/http/typeorm/entities/User.ts"
        );
    }

    #[test]
    fn test_fifteen_jobs_when_shared_error_exists() {
        let temp = TempDir::new().unwrap();
        let shared = temp.path().join(APP_ERROR_PATH);
        fs::create_dir_all(shared.parent().unwrap()).unwrap();
        fs::write(&shared, "hand edited").unwrap();

        let jobs = plan(&user_schema(), temp.path());

        assert_eq!(jobs.len(), 15);
        assert!(jobs.iter().all(|job| job.path != APP_ERROR_PATH));
        assert_eq!(
            jobs[0].path,
            "src/modules/user/infra/http/typeorm/entities/User.ts"
        );
    }

    #[test]
    fn test_paths_are_distinct_and_module_rooted() {
        let temp = TempDir::new().unwrap();
        let jobs = plan(&user_schema(), temp.path());

        let mut paths: Vec<_> = jobs.iter().map(|job| job.path.as_str()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), jobs.len());

        for job in jobs.iter().skip(1) {
            assert!(job.path.starts_with("src/modules/user/"), "{}", job.path);
        }
    }

    #[test]
    fn test_module_directory_is_camel_cased() {
        let temp = TempDir::new().unwrap();
        let schema = ModuleSchema::build("material-tree-knot", Some("code"), None).unwrap();
        let jobs = plan(&schema, temp.path());

        assert_eq!(
            jobs[1].path,
            "src/modules/materialTreeKnot/infra/http/typeorm/entities/MaterialTreeKnot.ts"
        );
        assert!(jobs
            .last()
            .unwrap()
            .path
            .ends_with("http/controllers/MaterialTreeKnotController.ts"));
    }
}
