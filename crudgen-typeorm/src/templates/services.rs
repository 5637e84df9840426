//! Service templates, one per CRUD operation.
//!
//! Services take the repository interface in the constructor so tests can
//! hand them a fake; lookups that miss throw the shared 404 `AppError`.

pub const SERVICE_CREATE: &str = r#"import {{name_pascal}} from '../infra/http/typeorm/entities/{{name_pascal}}';
import I{{name_pascal}}CreateDTO from '../dtos/I{{name_pascal}}CreateDTO';
import I{{name_pascal}}Repository from '../repositories/I{{name_pascal}}Repository';

export default class Create{{name_pascal}}Service {
    constructor(private {{name_camel}}Repository: I{{name_pascal}}Repository) {}

    public async execute(data: I{{name_pascal}}CreateDTO): Promise<{{name_pascal}}> {
        return this.{{name_camel}}Repository.createAndSave(data);
    }
}
"#;

pub const SERVICE_GET_BY_ID: &str = r#"import AppError from '../../../shared/errors/AppError';
import {{name_pascal}} from '../infra/http/typeorm/entities/{{name_pascal}}';
import I{{name_pascal}}Repository from '../repositories/I{{name_pascal}}Repository';

export default class GetById{{name_pascal}}Service {
    constructor(private {{name_camel}}Repository: I{{name_pascal}}Repository) {}

    public async execute(id: string): Promise<{{name_pascal}}> {
        const {{name_camel}} = await this.{{name_camel}}Repository.findById(id);

        if (!{{name_camel}}) {
            throw new AppError('{{name_pascal}} not found', 404);
        }

        return {{name_camel}};
    }
}
"#;

pub const SERVICE_GET_ALL: &str = r#"import {{name_pascal}} from '../infra/http/typeorm/entities/{{name_pascal}}';
import { {{name_pascal}}RequestGetAllInterface } from '../dtos/I{{name_pascal}}DTO';
import I{{name_pascal}}Repository from '../repositories/I{{name_pascal}}Repository';

export default class GetAll{{name_pascal}}Service {
    constructor(private {{name_camel}}Repository: I{{name_pascal}}Repository) {}

    public async execute(
        query: {{name_pascal}}RequestGetAllInterface,
    ): Promise<{ data: {{name_pascal}}[]; count: number } | {{name_pascal}}[]> {
        if (query.withPagination === false) {
            return this.{{name_camel}}Repository.getAllWithoutPagination(query);
        }

        return this.{{name_camel}}Repository.getAllWithPagination(query);
    }
}
"#;

pub const SERVICE_UPDATE: &str = r#"import AppError from '../../../shared/errors/AppError';
import {{name_pascal}} from '../infra/http/typeorm/entities/{{name_pascal}}';
import I{{name_pascal}}UpdateDTO from '../dtos/I{{name_pascal}}UpdateDTO';
import I{{name_pascal}}Repository from '../repositories/I{{name_pascal}}Repository';

export default class Update{{name_pascal}}Service {
    constructor(private {{name_camel}}Repository: I{{name_pascal}}Repository) {}

    public async execute(id: string, data: I{{name_pascal}}UpdateDTO): Promise<{{name_pascal}}> {
        const {{name_camel}} = await this.{{name_camel}}Repository.findById(id);

        if (!{{name_camel}}) {
            throw new AppError('{{name_pascal}} not found', 404);
        }

        Object.assign({{name_camel}}, data);

        return this.{{name_camel}}Repository.save({{name_camel}});
    }
}
"#;

pub const SERVICE_REMOVE: &str = r#"import AppError from '../../../shared/errors/AppError';
import I{{name_pascal}}Repository from '../repositories/I{{name_pascal}}Repository';

export default class Remove{{name_pascal}}Service {
    constructor(private {{name_camel}}Repository: I{{name_pascal}}Repository) {}

    public async execute(id: string): Promise<void> {
        const {{name_camel}} = await this.{{name_camel}}Repository.findById(id);

        if (!{{name_camel}}) {
            throw new AppError('{{name_pascal}} not found', 404);
        }

        await this.{{name_camel}}Repository.remove({{name_camel}});
    }
}
"#;
