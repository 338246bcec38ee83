//! Command-line interface for theme_sampler
//!
//! Basic CLI tool for testing theme derivation functionality

use std::{env, path::PathBuf, process};

use theme_sampler::{compute_theme_with, ThemeConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut css_output = false;
    let mut config_path = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--css" => {
                css_output = true;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(PathBuf::from(arg));
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(image_path) = image_path_arg else {
        eprintln!("Error: No image path provided");
        print_help(&args[0]);
        process::exit(1);
    };

    let config = match config_path {
        Some(path) => match ThemeConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => ThemeConfig::default(),
    };

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    match runtime.block_on(compute_theme_with(image_path, &config)) {
        Ok(palette) => {
            if css_output {
                print!("{}", palette.css_variables());
            } else {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&palette).expect("palette serializes")
                );
            }
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            eprintln!("({e})");
            process::exit(2);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {program} [OPTIONS] <image>");
    println!();
    println!("Derive a UI color palette from a background image.");
    println!();
    println!("Options:");
    println!("  --css            Print CSS custom-property assignments instead of JSON");
    println!("  --config <file>  Load derivation parameters from a JSON config file");
    println!("  -h, --help       Show this help text");
}
