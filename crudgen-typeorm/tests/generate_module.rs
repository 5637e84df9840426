//! End-to-end tests for CRUD module generation against a real filesystem.

use std::fs;
use std::path::Path;

use crudgen_typeorm::{Generator, ModuleSchema, APP_ERROR_PATH};
use tempfile::TempDir;

fn user_schema() -> ModuleSchema {
    ModuleSchema::build("user", Some("description,oi"), Some("code,test")).unwrap()
}

fn read(base: &Path, rel: &str) -> String {
    fs::read_to_string(base.join(rel)).unwrap_or_else(|_| panic!("missing file: {rel}"))
}

#[test]
fn test_generates_full_module() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    let generator = Generator::new(&schema).unwrap();

    let report = generator.generate(temp.path()).unwrap();

    assert_eq!(report.written.len(), 16);
    assert!(report.skipped.is_empty());

    // Shared error first, then the module artifacts
    assert_eq!(report.written[0], APP_ERROR_PATH);
    assert_eq!(
        report.written[1],
        "src/modules/user/infra/http/typeorm/entities/User.ts"
    );

    for rel in &report.written {
        assert!(temp.path().join(rel).is_file(), "not written: {rel}");
    }
}

#[test]
fn test_entity_content() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    Generator::new(&schema).unwrap().generate(temp.path()).unwrap();

    let entity = read(
        temp.path(),
        "src/modules/user/infra/http/typeorm/entities/User.ts",
    );

    assert!(entity.starts_with(
        "import { Entity, PrimaryGeneratedColumn, Column } from 'typeorm';"
    ));
    assert!(entity.contains("@Entity('user')"));
    assert!(entity.contains("export default class User {"));
    assert!(entity.contains("    description: string;"));
    assert!(entity.contains("    oi: string;"));
    assert!(entity.contains("    code: number;"));
    assert!(entity.contains("    test: number;"));
}

#[test]
fn test_dto_contents() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    Generator::new(&schema).unwrap().generate(temp.path()).unwrap();

    let dto = read(temp.path(), "src/modules/user/dtos/IUserDTO.ts");
    assert!(dto.contains("export interface UserInterface {"));
    assert!(dto.contains("export interface UserRequestGetAllInterface {"));
    assert!(dto.contains("    withPagination?: boolean;"));
    assert!(dto.contains("    description: string;"));
    assert!(dto.contains("    description?: string;"));
    assert!(dto.contains("    code?: number;"));

    let create = read(temp.path(), "src/modules/user/dtos/IUserCreateDTO.ts");
    assert!(create.contains("export default interface IUserCreateDTO {"));
    assert!(create.contains("    code: number;"));

    let update = read(temp.path(), "src/modules/user/dtos/IUserUpdateDTO.ts");
    assert!(update.contains("export default interface IUserUpdateDTO {"));
    assert!(update.contains("    oi?: string;"));
}

#[test]
fn test_repository_contents() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    Generator::new(&schema).unwrap().generate(temp.path()).unwrap();

    let interface = read(temp.path(), "src/modules/user/repositories/IUserRepository.ts");
    assert!(interface.contains("export default interface IUserRepository {"));
    assert!(interface.contains("createAndSave(data: UserInterface): Promise<User>;"));
    assert!(interface.contains("findById(id: string): Promise<User | undefined>;"));
    assert!(interface.contains("save(entity: User): Promise<User>;"));
    assert!(interface.contains("remove(entity: User): Promise<void>;"));

    let repo = read(
        temp.path(),
        "src/modules/user/infra/http/typeorm/repositories/UserRepository.ts",
    );
    assert!(repo.contains("import { Repository, getRepository } from 'typeorm';"));
    assert!(repo.contains("export default class UserRepository implements IUserRepository {"));
    assert!(repo.contains("this.ormRepository = getRepository(User);"));
    assert!(repo.contains("this.ormRepository.findOne({ where: { id } })"));
    assert!(repo.contains("await this.ormRepository.findAndCount("));
}

#[test]
fn test_service_contents() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    Generator::new(&schema).unwrap().generate(temp.path()).unwrap();

    let create = read(temp.path(), "src/modules/user/services/CreateUserService.ts");
    assert!(create.contains("export default class CreateUserService {"));
    assert!(create.contains("constructor(private userRepository: IUserRepository) {}"));
    assert!(create.contains("return this.userRepository.createAndSave(data);"));

    let get_by_id = read(temp.path(), "src/modules/user/services/GetByIdUserService.ts");
    assert!(get_by_id.contains("import AppError from '../../../shared/errors/AppError';"));
    assert!(get_by_id.contains("throw new AppError('User not found', 404);"));

    let get_all = read(temp.path(), "src/modules/user/services/GetAllUserService.ts");
    assert!(get_all.contains("getAllWithoutPagination(query)"));
    assert!(get_all.contains("getAllWithPagination(query)"));

    let update = read(temp.path(), "src/modules/user/services/UpdateUserService.ts");
    assert!(update.contains("Object.assign(user, data);"));
    assert!(update.contains("return this.userRepository.save(user);"));

    let remove = read(temp.path(), "src/modules/user/services/RemoveUserService.ts");
    assert!(remove.contains("await this.userRepository.remove(user);"));
}

#[test]
fn test_validator_contents() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    Generator::new(&schema).unwrap().generate(temp.path()).unwrap();

    let create = read(
        temp.path(),
        "src/modules/user/common/validations/createUserValidator.ts",
    );
    assert!(create.contains("export const createUserSchema = Joi.object().keys({"));
    assert!(create.contains("    description: Joi.string().required(),"));
    assert!(create.contains("    code: Joi.number().required(),"));

    let update = read(
        temp.path(),
        "src/modules/user/common/validations/updateUserValidator.ts",
    );
    assert!(update.contains("export const updateUserSchema = Joi.object().keys({"));
    assert!(update.contains("    oi: Joi.string(),"));

    let get_all = read(
        temp.path(),
        "src/modules/user/common/validations/getAllUserValidator.ts",
    );
    assert!(get_all.contains("export const getAllUserSchema = Joi.object().keys({"));
    assert!(get_all.contains("    page: Joi.number(),"));
    assert!(get_all.contains("    sortOrder: Joi.string().valid('ASC', 'DESC'),"));
}

#[test]
fn test_controller_contents() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    Generator::new(&schema).unwrap().generate(temp.path()).unwrap();

    let controller = read(
        temp.path(),
        "src/modules/user/http/controllers/UserController.ts",
    );
    assert!(controller.contains("import { Request, Response } from 'express';"));
    for handler in ["create", "findOne", "getAll", "update", "remove"] {
        assert!(
            controller.contains(&format!(
                "export async function {handler}(request: Request, response: Response)"
            )),
            "missing handler: {handler}"
        );
    }
    assert!(controller.contains("new CreateUserService(new UserRepository())"));
    assert!(controller.contains("return response.status(201).json(user);"));
}

#[test]
fn test_rerun_preserves_shared_error_and_overwrites_module_files() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    let generator = Generator::new(&schema).unwrap();

    generator.generate(temp.path()).unwrap();

    // Simulate hand edits
    let shared = temp.path().join(APP_ERROR_PATH);
    fs::write(&shared, "// customized error type").unwrap();
    let entity = temp
        .path()
        .join("src/modules/user/infra/http/typeorm/entities/User.ts");
    fs::write(&entity, "// customized entity").unwrap();

    let report = generator.generate(temp.path()).unwrap();

    // Second run plans 15 jobs: the shared error already exists
    assert_eq!(report.written.len(), 15);
    assert_eq!(
        fs::read_to_string(&shared).unwrap(),
        "// customized error type"
    );
    assert!(fs::read_to_string(&entity)
        .unwrap()
        .contains("export default class User {"));
}

#[test]
fn test_rerun_is_idempotent_for_identical_input() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    let generator = Generator::new(&schema).unwrap();

    generator.generate(temp.path()).unwrap();
    let first = read(temp.path(), "src/modules/user/dtos/IUserDTO.ts");

    generator.generate(temp.path()).unwrap();
    let second = read(temp.path(), "src/modules/user/dtos/IUserDTO.ts");

    assert_eq!(first, second);
}

#[test]
fn test_preview_renders_without_writing() {
    let temp = TempDir::new().unwrap();
    let schema = user_schema();
    let generator = Generator::new(&schema).unwrap();

    let files = generator.preview(temp.path()).unwrap();

    assert_eq!(files.len(), 16);
    assert_eq!(files[0].path, APP_ERROR_PATH);
    assert!(files
        .iter()
        .any(|f| f.path == "src/modules/user/http/controllers/UserController.ts"));
    assert!(files.iter().all(|f| !f.content.is_empty()));

    // Nothing on disk
    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_validation_failures_issue_no_jobs() {
    assert!(ModuleSchema::build("", Some("description"), None).is_err());
    assert!(ModuleSchema::build("order", None, None).is_err());
    // A schema is a precondition for a generator, so nothing can be written.
}

#[test]
fn test_strings_only_and_numbers_only_modules() {
    let temp = TempDir::new().unwrap();

    let strings_only = ModuleSchema::build("tag", Some("label"), None).unwrap();
    let report = Generator::new(&strings_only)
        .unwrap()
        .generate(temp.path())
        .unwrap();
    assert_eq!(report.written.len(), 16);

    let entity = read(temp.path(), "src/modules/tag/infra/http/typeorm/entities/Tag.ts");
    assert!(entity.contains("    label: string;"));
    assert!(!entity.contains(": number;"));

    let numbers_only = ModuleSchema::build("counter", None, Some("value")).unwrap();
    let report = Generator::new(&numbers_only)
        .unwrap()
        .generate(temp.path())
        .unwrap();
    // Shared error already present from the first module
    assert_eq!(report.written.len(), 15);

    let entity = read(
        temp.path(),
        "src/modules/counter/infra/http/typeorm/entities/Counter.ts",
    );
    assert!(entity.contains("    value: number;"));
}

#[test]
fn test_write_failure_is_fatal_and_reported_with_path() {
    let temp = TempDir::new().unwrap();

    // Block the module tree with a regular file so directory creation fails.
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/modules"), "").unwrap();

    let schema = user_schema();
    let err = Generator::new(&schema)
        .unwrap()
        .generate(temp.path())
        .unwrap_err();

    assert!(matches!(err, crudgen_typeorm::Error::Write { .. }));
    assert_eq!(err.exit_code(), 5);
    // The shared error file was written before the failure and stays on disk.
    assert!(temp.path().join(APP_ERROR_PATH).is_file());
}
