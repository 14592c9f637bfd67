/* Codegen command - generate wrapper declarations from schema files */

use crate::codegen::kotlin::{KotlinCodeGenerator, KotlinCodeGeneratorOptions};
use crate::schema::file::{build_repository, SchemaFile};
use std::path::PathBuf;

/* Execute the codegen command */
pub fn run(
    files: Vec<PathBuf>,
    output_dir: PathBuf,
    should_unsafe_cast: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        println!("Tag Generator - Wrapper Declaration Tool");
        println!("========================================\n");
        println!("[~] Configuration:");
        println!("  Output directory: {}", output_dir.display());
        println!("  Unsafe cast: {}", should_unsafe_cast);
        println!("  Input files: {}", files.len());
        for file in &files {
            println!("    - {}", file.display());
        }
        println!();
    }

    let mut loaded = Vec::with_capacity(files.len());
    for file in &files {
        loaded.push(SchemaFile::load(file)?);
    }

    let mut repository = build_repository(loaded)?;

    if verbose {
        println!(
            "[~] Loaded schema: {} attribute(s), {} facade(s), {} event(s)",
            repository.attributes().count(),
            repository.facades().len(),
            repository.events().len(),
        );
    }

    std::fs::create_dir_all(&output_dir)?;

    let options = KotlinCodeGeneratorOptions {
        output_dir: output_dir.to_string_lossy().to_string(),
        should_unsafe_cast,
        ..Default::default()
    };
    let generator = KotlinCodeGenerator::new(options);
    generator.emit_code(&mut repository)?;

    println!(
        "[✓] Generated declarations in {}: attributes.kt, attribute-groups.kt, event-attributes.kt",
        output_dir.display()
    );

    Ok(())
}
