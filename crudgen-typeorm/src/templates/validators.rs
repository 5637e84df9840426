//! Joi validation schema templates, consumed by the hand-authored routes.

pub const VALIDATOR_CREATE: &str = r#"import Joi from 'joi';

export const create{{name_pascal}}Schema = Joi.object().keys({
{{#each strings}}    {{original}}: Joi.string().required(),
{{/each}}{{#each numbers}}    {{original}}: Joi.number().required(),
{{/each}}});
"#;

pub const VALIDATOR_UPDATE: &str = r#"import Joi from 'joi';

export const update{{name_pascal}}Schema = Joi.object().keys({
{{#each strings}}    {{original}}: Joi.string(),
{{/each}}{{#each numbers}}    {{original}}: Joi.number(),
{{/each}}});
"#;

pub const VALIDATOR_GET_ALL: &str = r#"import Joi from 'joi';

export const getAll{{name_pascal}}Schema = Joi.object().keys({
    page: Joi.number(),
    size: Joi.number(),
    withPagination: Joi.boolean(),
    showInactive: Joi.boolean(),
    sortParam: Joi.string(),
    sortOrder: Joi.string().valid('ASC', 'DESC'),
{{#each strings}}    {{original}}: Joi.string(),
{{/each}}{{#each numbers}}    {{original}}: Joi.number(),
{{/each}}});
"#;
