use std::path::Path;

use clap::Args;
use crudgen_typeorm::{Generator, ModuleSchema, PreviewFile};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CrudCommand {
    /// Table name every generated name and path derives from
    table_name: String,

    /// Comma-separated string column names
    #[arg(long)]
    strings: Option<String>,

    /// Comma-separated numeric column names
    #[arg(long)]
    numbers: Option<String>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    dry_run: bool,
}

impl CrudCommand {
    /// Run the crud command.
    ///
    /// Output paths are convention-fixed relative to the current directory;
    /// there is deliberately no flag for output location or overwrite
    /// behaviour.
    pub fn run(&self) -> Result<()> {
        let schema = ModuleSchema::build(
            &self.table_name,
            self.strings.as_deref(),
            self.numbers.as_deref(),
        )
        .unwrap_or_exit();

        let generator = Generator::new(&schema).unwrap_or_exit();
        let base = Path::new(".");

        if self.dry_run {
            let files = generator.preview(base).unwrap_or_exit();
            Self::print_preview(&files);
            return Ok(());
        }

        let report = generator.generate(base).unwrap_or_exit();

        println!(
            "{} module ({} columns)",
            schema.name_camel,
            schema.column_count()
        );
        println!();
        for path in &report.written {
            println!("  + {path}");
        }
        for path in &report.skipped {
            println!("  = {path} (kept)");
        }
        println!();
        println!("Successfully generated CRUD.");

        Ok(())
    }

    fn print_preview(files: &[PreviewFile]) {
        for file in files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());
    }
}
