//! Embedded handlebars templates and the registry that renders them.
//!
//! Template substitution is deliberately dumb: variable interpolation and
//! iteration over the schema's field lists, nothing else. Anything smarter
//! belongs in the schema, not in a template.

mod controller;
mod dtos;
mod entity;
mod repositories;
mod services;
mod shared;
mod validators;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Error, Result};

/// Template ids, as referenced by render jobs and error messages.
pub mod ids {
    pub const APP_ERROR: &str = "shared/appError";
    pub const ENTITY: &str = "entity";
    pub const DTO_INTERFACE: &str = "dtos/interface";
    pub const DTO_CREATE: &str = "dtos/create";
    pub const DTO_UPDATE: &str = "dtos/update";
    pub const REPOSITORY_INTERFACE: &str = "repositories/interface";
    pub const REPOSITORY_TYPEORM: &str = "repositories/typeorm";
    pub const SERVICE_CREATE: &str = "services/create";
    pub const SERVICE_GET_BY_ID: &str = "services/getById";
    pub const SERVICE_GET_ALL: &str = "services/getAll";
    pub const SERVICE_UPDATE: &str = "services/update";
    pub const SERVICE_REMOVE: &str = "services/remove";
    pub const VALIDATOR_CREATE: &str = "validators/create";
    pub const VALIDATOR_UPDATE: &str = "validators/update";
    pub const VALIDATOR_GET_ALL: &str = "validators/getAll";
    pub const CONTROLLER: &str = "controller";
}

const SOURCES: &[(&str, &str)] = &[
    (ids::APP_ERROR, shared::APP_ERROR),
    (ids::ENTITY, entity::ENTITY),
    (ids::DTO_INTERFACE, dtos::DTO_INTERFACE),
    (ids::DTO_CREATE, dtos::DTO_CREATE),
    (ids::DTO_UPDATE, dtos::DTO_UPDATE),
    (ids::REPOSITORY_INTERFACE, repositories::REPOSITORY_INTERFACE),
    (ids::REPOSITORY_TYPEORM, repositories::REPOSITORY_TYPEORM),
    (ids::SERVICE_CREATE, services::SERVICE_CREATE),
    (ids::SERVICE_GET_BY_ID, services::SERVICE_GET_BY_ID),
    (ids::SERVICE_GET_ALL, services::SERVICE_GET_ALL),
    (ids::SERVICE_UPDATE, services::SERVICE_UPDATE),
    (ids::SERVICE_REMOVE, services::SERVICE_REMOVE),
    (ids::VALIDATOR_CREATE, validators::VALIDATOR_CREATE),
    (ids::VALIDATOR_UPDATE, validators::VALIDATOR_UPDATE),
    (ids::VALIDATOR_GET_ALL, validators::VALIDATOR_GET_ALL),
    (ids::CONTROLLER, controller::CONTROLLER),
];

/// All templates, registered by id, with HTML escaping disabled since the
/// output is code.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in SOURCES {
            handlebars
                .register_template_string(name, source)
                .map_err(|source| Error::Template {
                    name: (*name).to_string(),
                    source,
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Render one template against the schema.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.handlebars.has_template(name) {
            return Err(Error::TemplateNotFound {
                name: name.to_string(),
            });
        }

        self.handlebars
            .render(name, data)
            .map_err(|source| Error::Render {
                name: name.to_string(),
                source,
            })
    }
}
