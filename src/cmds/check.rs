/* Check command - load and validate schema files without generating code */

use crate::schema::file::{build_repository, SchemaFile};
use std::path::PathBuf;

/* Execute the check command. A schema that loads, resolves every facade
 * attribute reference and parses every type tag is considered well-formed.
 */
pub fn run(files: Vec<PathBuf>, verbose: bool) -> anyhow::Result<()> {
    let mut loaded = Vec::with_capacity(files.len());
    for file in &files {
        if verbose {
            println!("[~] Loading {}", file.display());
        }
        loaded.push(SchemaFile::load(file)?);
    }

    let repository = build_repository(loaded)?;

    println!(
        "[✓] Schema OK: {} attribute(s), {} facade(s), {} event(s)",
        repository.attributes().count(),
        repository.facades().len(),
        repository.events().len(),
    );

    if verbose {
        for facade in repository.facades() {
            println!(
                "    - {} : {} ({} attribute(s))",
                facade.class_name,
                facade.parents.join(", "),
                facade.declared_attributes.len(),
            );
        }
    }

    Ok(())
}
