//! TypeORM entity template.

/// The entity class: uuid primary key plus one `@Column()` per field, using
/// the original column tokens so the class matches the database schema.
pub const ENTITY: &str = r#"import { Entity, PrimaryGeneratedColumn, Column } from 'typeorm';

@Entity('{{table_name}}')
export default class {{name_pascal}} {
    @PrimaryGeneratedColumn('uuid')
    id: string;
{{#each strings}}
    @Column()
    {{original}}: string;
{{/each}}{{#each numbers}}
    @Column()
    {{original}}: number;
{{/each}}}
"#;
