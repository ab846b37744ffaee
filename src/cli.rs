//! Minimal CLI: schema file → GeneratedTest.java
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use crate::error::GenError;
use crate::settings::GeneratorSettings;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate a JUnit test exercising the all-args constructor, builder and
/// no-args constructor of the classes described by a JSON sample
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// JSON file whose top-level object describes the fields of `OuterClass`
    input: PathBuf,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        let settings = GeneratorSettings::default();

        // 1) read + classify
        let root = load_schema(&self.input)?;

        // 2) generate the whole file before touching the destination
        let source = crate::assemble::assemble(&root)
            .with_context(|| format!("failed to generate a test from {}", self.input.display()))?;

        // 3) write
        crate::output::write_atomic(Path::new(settings.output_file), &source)?;

        println!(
            "{} JUnit test class generated and saved to {}",
            "done:".green().bold(),
            settings.output_file
        );
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn load_schema(path: &Path) -> Result<crate::ir::Nested> {
    if !path.is_file() {
        return Err(GenError::Usage(format!(
            "input schema file not found: {}",
            path.display()
        ))
        .into());
    }
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let root = crate::lower::parse_document(&source)
        .with_context(|| format!("invalid schema file {}", path.display()))?;
    Ok(root)
}
