//! Repository templates: the interface consumed by services and its TypeORM
//! implementation.
//!
//! The interface carries `save`/`remove` on top of the query methods because
//! the update/remove services depend on them.

pub const REPOSITORY_INTERFACE: &str = r#"import {{name_pascal}} from '../infra/http/typeorm/entities/{{name_pascal}}';
import {
    {{name_pascal}}Interface,
    {{name_pascal}}RequestGetAllInterface,
} from '../dtos/I{{name_pascal}}DTO';

export default interface I{{name_pascal}}Repository {
    createAndSave(data: {{name_pascal}}Interface): Promise<{{name_pascal}}>;
    findById(id: string): Promise<{{name_pascal}} | undefined>;
    getAllWithPagination(
        query: {{name_pascal}}RequestGetAllInterface,
    ): Promise<{ data: {{name_pascal}}[]; count: number }>;
    getAllWithoutPagination(
        query: {{name_pascal}}RequestGetAllInterface,
    ): Promise<{{name_pascal}}[]>;
    save(entity: {{name_pascal}}): Promise<{{name_pascal}}>;
    remove(entity: {{name_pascal}}): Promise<void>;
}
"#;

pub const REPOSITORY_TYPEORM: &str = r#"import { Repository, getRepository } from 'typeorm';

import {{name_pascal}} from '../entities/{{name_pascal}}';
import {
    {{name_pascal}}Interface,
    {{name_pascal}}RequestGetAllInterface,
} from '../../../../dtos/I{{name_pascal}}DTO';
import I{{name_pascal}}Repository from '../../../../repositories/I{{name_pascal}}Repository';

export default class {{name_pascal}}Repository implements I{{name_pascal}}Repository {
    private ormRepository: Repository<{{name_pascal}}>;

    constructor() {
        this.ormRepository = getRepository({{name_pascal}});
    }

    public async createAndSave(data: {{name_pascal}}Interface): Promise<{{name_pascal}}> {
        const created = this.ormRepository.create(data);

        return this.ormRepository.save(created);
    }

    public async findById(id: string): Promise<{{name_pascal}} | undefined> {
        return this.ormRepository.findOne({ where: { id } });
    }

    public async getAllWithPagination(
        query: {{name_pascal}}RequestGetAllInterface,
    ): Promise<{ data: {{name_pascal}}[]; count: number }> {
        const page = query.page || 1;
        const size = query.size || 20;

        const [data, count] = await this.ormRepository.findAndCount({
            skip: (page - 1) * size,
            take: size,
        });

        return { data, count };
    }

    public async getAllWithoutPagination(
        _query: {{name_pascal}}RequestGetAllInterface,
    ): Promise<{{name_pascal}}[]> {
        return this.ormRepository.find();
    }

    public async save(entity: {{name_pascal}}): Promise<{{name_pascal}}> {
        return this.ormRepository.save(entity);
    }

    public async remove(entity: {{name_pascal}}): Promise<void> {
        await this.ormRepository.remove(entity);
    }
}
"#;
