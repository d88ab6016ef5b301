//! # OCPI Record Validator
//!
//! A command-line utility that validates OCPI records stored as JSON files and
//! prints their canonical form.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin ocpi-validate 2.2.1 locations location.json
//! cargo run --bin ocpi-validate 2.1.1 tokens ./tokens/ --partial
//! OCPI_VERSION=2.1.1 cargo run --bin ocpi-validate sessions session.json
//! ```
//!
//! A directory argument validates every `.json` file inside it. When the
//! version is left out it comes from the `OCPI_VERSION` environment variable,
//! falling back to 2.2.1.
//!
//! ## Options
//!
//! - `--partial`: validate the record as a partial update
//! - `--uppercase`: fold case-insensitive strings to uppercase
//!
//! Without `--uppercase` the case preference comes from the
//! `CI_STRING_LOWERCASE_PREFERENCE` environment variable.
//!
//! ## Output Examples
//!
//! ```text
//! Validating 2.2.1 connector: connector.json
//! ✓ Record is valid (key: 1)
//! {
//!   "id": "1",
//!   ...
//! }
//! ```
//!
//! ```text
//! Validating 2.2.1 connector: connector.json
//! ❌ Validation failed at 'tariff_ids[2]': Value has invalid printable ASCII format: tarifé
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: All records are valid
//! - `1`: One or more records are invalid, or the arguments are wrong

use ocpi_schema::{
    OcpiError, ProtocolVersion, ResourceKind, ValidationConfig, ValidationContext,
    ValidationError, validate_object, validate_patch,
};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

struct Options {
    version: ProtocolVersion,
    kind: ResourceKind,
    partial: bool,
    ctx: ValidationContext,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("ocpi-validate", String::as_str);
    let (positional, flags) = split_args(&args);

    if !(2..=3).contains(&positional.len()) {
        print_usage(program);
        process::exit(1);
    }

    let options = match parse_options(&positional, &flags) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let path = Path::new(positional[positional.len() - 1]);
    let ok = if path.is_file() {
        validate_file(path, &options)
    } else if path.is_dir() {
        validate_directory(path, &options)
    } else {
        eprintln!(
            "Error: '{}' is not a valid file or directory",
            path.display()
        );
        false
    };

    if !ok {
        process::exit(1);
    }
}

/// Split the arguments after the program name into positionals and `--` flags
fn split_args(args: &[String]) -> (Vec<&str>, Vec<&str>) {
    args.iter()
        .skip(1)
        .map(String::as_str)
        .partition(|a| !a.starts_with("--"))
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} [<version>] <resource> <file-or-directory> [--partial] [--uppercase]",
        program
    );
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} 2.2.1 locations location.json", program);
    eprintln!("  {} 2.1.1 sessions ./sessions/ --partial", program);
    eprintln!("  OCPI_VERSION=2.1.1 {} tokens token.json", program);
}

fn parse_options(positional: &[&str], flags: &[&str]) -> Result<Options, OcpiError> {
    let config = ValidationConfig::from_env()?;
    let (requested, kind) = match positional {
        [version, kind, _] => (Some(*version), *kind),
        [kind, _] => (None, *kind),
        _ => {
            let usage = "[<version>] <resource> <file-or-directory>";
            return Err(ValidationError::format_violation(usage, positional.join(" ")).into());
        }
    };
    let version = config.version_or_default(requested)?;
    let kind: ResourceKind = kind.parse()?;

    let mut ctx = config.context();
    if flags.contains(&"--uppercase") {
        ctx = ValidationContext::uppercase();
    }

    Ok(Options {
        version,
        kind,
        partial: flags.contains(&"--partial"),
        ctx,
    })
}

fn validate_file(path: &Path, options: &Options) -> bool {
    println!(
        "Validating {} {}: {}",
        options.version,
        options.kind,
        path.display()
    );

    match load_and_validate(path, options) {
        Ok(canonical) => {
            println!("{}", canonical);
            true
        }
        Err(e) => {
            match &e {
                OcpiError::Validation(error) => eprintln!(
                    "❌ Validation failed at '{}': {}",
                    error.location(),
                    error.root_cause()
                ),
                other => eprintln!("❌ {}", other),
            }
            false
        }
    }
}

fn validate_directory(dir_path: &Path, options: &Options) -> bool {
    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory: {}", e);
            return false;
        }
    };

    let mut valid_count = 0;
    let mut error_count = 0;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if validate_file(&path, options) {
            valid_count += 1;
        } else {
            error_count += 1;
        }
    }

    println!("\nValidation Summary:");
    println!("  Valid records: {}", valid_count);
    println!("  Invalid records: {}", error_count);

    error_count == 0
}

fn load_and_validate(path: &Path, options: &Options) -> Result<String, OcpiError> {
    let content = fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&content)?;

    let canonical = if options.partial {
        let patch = validate_patch(options.version, options.kind, &raw, &options.ctx)?;
        if patch.is_empty() {
            println!("✓ Patch is valid (no changes)");
        } else {
            println!("✓ Patch is valid");
        }
        serde_json::to_string_pretty(&patch)?
    } else {
        let object = validate_object(options.version, options.kind, &raw, &options.ctx)?;
        println!("✓ Record is valid (key: {})", object.key());
        serde_json::to_string_pretty(&object)?
    };

    Ok(canonical)
}
