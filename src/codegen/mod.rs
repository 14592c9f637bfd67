pub mod kotlin;
pub mod kotlin_gen;
pub mod shared;

use crate::schema::repository::Repository;
use std::path::Path;

/* Run the Kotlin generator with default options into `output_dir` */
pub fn generate_all(repository: &mut Repository, output_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(output_dir)?;

    let options = kotlin::KotlinCodeGeneratorOptions {
        output_dir: output_dir.to_string_lossy().to_string(),
        ..Default::default()
    };
    let generator = kotlin::KotlinCodeGenerator::new(options);
    generator.emit_code(repository)?;

    Ok(())
}
