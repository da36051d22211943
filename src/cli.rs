use std::fs;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    wgsl-validate shaders/background.wgsl     # Validate a pipeline shader standalone")]
pub struct Cli {
    /// Path to the WGSL shader file
    pub shader_file: PathBuf,
}

impl Cli {
    pub fn parse_and_load() -> Result<(Self, String), Box<dyn std::error::Error>> {
        // Parse command line arguments
        let cli = Self::parse();

        // Load shader file
        let shader_source = match fs::read_to_string(&cli.shader_file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "Error reading shader file '{}': {}",
                    cli.shader_file.display(),
                    e
                );
                std::process::exit(1);
            }
        };

        Ok((cli, shader_source))
    }
}
