//! Express controller template.
//!
//! One exported handler per route; repository and service are instantiated
//! per request, matching how the hand-authored routes consume them.

pub const CONTROLLER: &str = r#"import { Request, Response } from 'express';

import Create{{name_pascal}}Service from '../../services/Create{{name_pascal}}Service';
import GetById{{name_pascal}}Service from '../../services/GetById{{name_pascal}}Service';
import GetAll{{name_pascal}}Service from '../../services/GetAll{{name_pascal}}Service';
import Update{{name_pascal}}Service from '../../services/Update{{name_pascal}}Service';
import Remove{{name_pascal}}Service from '../../services/Remove{{name_pascal}}Service';
import {{name_pascal}}Repository from '../../infra/http/typeorm/repositories/{{name_pascal}}Repository';

export async function create(request: Request, response: Response): Promise<Response> {
    const service = new Create{{name_pascal}}Service(new {{name_pascal}}Repository());

    const {{name_camel}} = await service.execute(request.body);

    return response.status(201).json({{name_camel}});
}

export async function findOne(request: Request, response: Response): Promise<Response> {
    const service = new GetById{{name_pascal}}Service(new {{name_pascal}}Repository());

    const {{name_camel}} = await service.execute(request.params.id);

    return response.status(200).json({{name_camel}});
}

export async function getAll(request: Request, response: Response): Promise<Response> {
    const service = new GetAll{{name_pascal}}Service(new {{name_pascal}}Repository());

    const {{name_camel}}List = await service.execute(request.query);

    return response.status(200).json({{name_camel}}List);
}

export async function update(request: Request, response: Response): Promise<Response> {
    const service = new Update{{name_pascal}}Service(new {{name_pascal}}Repository());

    const {{name_camel}} = await service.execute(request.params.id, request.body);

    return response.status(200).json({{name_camel}});
}

export async function remove(request: Request, response: Response): Promise<Response> {
    const service = new Remove{{name_pascal}}Service(new {{name_pascal}}Repository());

    await service.execute(request.params.id);

    return response.status(204).json();
}
"#;
