//! Build script for sous-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml and compiles it to a postcard blob
//! - Validates recipes.json and compiles it to a postcard blob

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sous_core::config::DeviceConfig;
use sous_core::recipe::RecipeBook;

fn main() {
    setup_linker();

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let config = load_config();
    validate_config(&config);
    write_blob(&out_dir.join("device.bin"), &postcard::to_stdvec(&config).unwrap());
    println!("cargo:warning=device.toml validated successfully");

    let book = load_recipes();
    validate_recipes(&book);
    write_blob(&out_dir.join("recipes.bin"), &postcard::to_stdvec(&book).unwrap());
    println!(
        "cargo:warning=recipes.json validated successfully ({} recipes)",
        book.len()
    );
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn write_blob(path: &Path, bytes: &[u8]) {
    let mut f = File::create(path).unwrap();
    f.write_all(bytes).unwrap();
}

fn read_source(name: &str) -> String {
    println!("cargo:rerun-if-changed={}", name);

    let path = Path::new(name);
    if !path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: {:<56} ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds this file at build time.                    ║\n\
            ║  Please create one in the sous-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("{} not found!", name)
        );
    }

    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read {:<41} ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                name, e
            );
        }
    }
}

/// Parse device.toml; missing sections and keys take their defaults
fn load_config() -> DeviceConfig {
    let content = read_source("device.toml");

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML in device.toml                              ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Parse recipes.json into the fixed-capacity document
fn load_recipes() -> RecipeBook {
    let content = read_source("recipes.json");

    match serde_json::from_str(&content) {
        Ok(book) => book,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid recipe document in recipes.json                  ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn fail(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate device configuration ranges
fn validate_config(config: &DeviceConfig) {
    let mut errors = Vec::new();

    let display = &config.display;
    if display.width == 0 || display.width > 480 {
        errors.push("[display] width must be 1-480".to_string());
    }
    if display.height == 0 || display.height > 480 {
        errors.push("[display] height must be 1-480".to_string());
    }
    if !(1_000_000..=62_500_000).contains(&display.spi_hz) {
        errors.push("[display] spi_hz must be 1 MHz - 62.5 MHz".to_string());
    }
    if display.max_chunk == 0 {
        errors.push("[display] max_chunk must be non-zero".to_string());
    }
    if display.band_rows == 0 {
        errors.push("[display] band_rows must be non-zero".to_string());
    }

    let input = &config.input;
    if input.sample_ms == 0 || input.sample_ms > 100 {
        errors.push("[input] sample_ms must be 1-100".to_string());
    }
    if input.settle_ms < input.sample_ms || input.settle_ms > 500 {
        errors.push("[input] settle_ms must be sample_ms-500".to_string());
    }

    let ui = &config.ui;
    if ui.scroll_step <= 0 {
        errors.push("[ui] scroll_step must be positive".to_string());
    }
    if ui.refresh_ms == 0 || ui.refresh_ms > 1000 {
        errors.push("[ui] refresh_ms must be 1-1000".to_string());
    }

    let timer = &config.timer;
    if timer.step_s == 0 {
        errors.push("[timer] step_s must be non-zero".to_string());
    }
    if timer.max_s == 0 || timer.max_s > 99 * 60 + 59 {
        errors.push("[timer] max_s must be 1-5999".to_string());
    }
    if timer.step_s != 0 && timer.max_s % timer.step_s != 0 {
        errors.push("[timer] max_s must be a multiple of step_s".to_string());
    }

    let scale = &config.scale;
    if scale.interval_ms < 100 {
        errors.push("[scale] interval_ms must be at least 100".to_string());
    }
    if scale.samples == 0 {
        errors.push("[scale] samples must be non-zero".to_string());
    }
    if !(scale.counts_per_gram.is_finite() && scale.counts_per_gram != 0.0) {
        errors.push("[scale] counts_per_gram must be finite and non-zero".to_string());
    }

    if !errors.is_empty() {
        fail("Invalid device configuration", &errors);
    }
}

/// Reject documents the UI could not show at all
///
/// Recipes without ingredient or instruction lists are allowed; the
/// matching screen reports the gap at run time.
fn validate_recipes(book: &RecipeBook) {
    let mut errors = Vec::new();

    match &book.recipes {
        None => errors.push("missing \"recipes\" sequence".to_string()),
        Some(recipes) if recipes.is_empty() => {
            errors.push("\"recipes\" must name at least one dish".to_string())
        }
        Some(recipes) => {
            for (i, recipe) in recipes.iter().enumerate() {
                if recipe.name.is_empty() {
                    errors.push(format!("recipe {} has an empty name", i));
                }
                if recipes[..i].iter().any(|r| r.name == recipe.name) {
                    errors.push(format!("duplicate recipe '{}'", recipe.name));
                }
            }
        }
    }

    if !errors.is_empty() {
        fail("Invalid recipe document", &errors);
    }
}
