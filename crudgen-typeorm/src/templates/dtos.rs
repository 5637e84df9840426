//! DTO templates.
//!
//! The main DTO file carries both the entity interface and the get-all
//! request interface; create/update DTOs get their own files.

pub const DTO_INTERFACE: &str = r#"export interface {{name_pascal}}Interface {
{{#each strings}}    {{original}}: string;
{{/each}}{{#each numbers}}    {{original}}: number;
{{/each}}}

export interface {{name_pascal}}RequestGetAllInterface {
    page?: number;
    size?: number;
    withPagination?: boolean;
    showInactive?: boolean;
    sortParam?: string;
    sortOrder?: 'ASC' | 'DESC';
{{#each strings}}    {{original}}?: string;
{{/each}}{{#each numbers}}    {{original}}?: number;
{{/each}}}
"#;

pub const DTO_CREATE: &str = r#"export default interface I{{name_pascal}}CreateDTO {
{{#each strings}}    {{original}}: string;
{{/each}}{{#each numbers}}    {{original}}: number;
{{/each}}}
"#;

pub const DTO_UPDATE: &str = r#"export default interface I{{name_pascal}}UpdateDTO {
{{#each strings}}    {{original}}?: string;
{{/each}}{{#each numbers}}    {{original}}?: number;
{{/each}}}
"#;
