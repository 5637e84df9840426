//! The module schema: every derived name and field list, computed once per
//! run and handed to every template.

use crudgen_core::{to_camel_case, to_pascal_case};
use serde::Serialize;

use crate::error::{Error, Result};

/// Three-way aligned representations of one column name.
///
/// Order is preserved from user input and the three forms stay index-aligned;
/// templates pick whichever form fits the artifact.
#[derive(Debug, Clone, Serialize)]
pub struct FieldNames {
    pub original: String,
    pub camel: String,
    pub pascal: String,
}

impl FieldNames {
    fn derive(original: &str) -> Self {
        Self {
            original: original.to_string(),
            camel: to_camel_case(original),
            pascal: to_pascal_case(original),
        }
    }
}

/// Everything the templates need for one CRUD module.
///
/// Built exactly once per invocation; all render jobs share the same schema
/// so the generated artifacts always agree on naming and field lists.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSchema {
    /// Raw user-supplied table name, used verbatim in `@Entity(...)`.
    pub table_name: String,
    /// camelCase form, used for the module directory and variable names.
    pub name_camel: String,
    /// PascalCase form, used for class names and file prefixes.
    pub name_pascal: String,
    pub strings: Vec<FieldNames>,
    pub numbers: Vec<FieldNames>,
}

impl ModuleSchema {
    /// Validate the raw CLI input and derive the schema.
    ///
    /// Validation order matters: an empty table name is reported first, then
    /// the absence of both column lists. Both checks short-circuit before any
    /// file is written.
    pub fn build(
        table_name: &str,
        strings: Option<&str>,
        numbers: Option<&str>,
    ) -> Result<Self> {
        let table_name = table_name.trim();
        if table_name.is_empty() {
            return Err(Error::MissingTableName);
        }

        let strings = parse_columns(strings);
        let numbers = parse_columns(numbers);
        if strings.is_empty() && numbers.is_empty() {
            return Err(Error::MissingColumns);
        }

        let name_camel = to_camel_case(table_name);
        let name_pascal = to_pascal_case(&name_camel);

        Ok(Self {
            table_name: table_name.to_string(),
            name_camel,
            name_pascal,
            strings,
            numbers,
        })
    }

    /// Total column count across both lists.
    pub fn column_count(&self) -> usize {
        self.strings.len() + self.numbers.len()
    }
}

fn parse_columns(raw: Option<&str>) -> Vec<FieldNames> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|column| !column.is_empty())
            .map(FieldNames::derive)
            .collect()
    })
    .unwrap_or_default()
}
