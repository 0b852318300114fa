//! Configuration for the rock32 command-line tool.
//!
//! Handles parsing command-line arguments into a plain struct. The tool
//! works with zero arguments: stdin to stdout, uppercase encode.

use std::path::PathBuf;

/// Complete configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input file path (None or "-" = stdin)
    pub input: Option<PathBuf>,

    /// Output file path (None or "-" = stdout)
    pub output: Option<PathBuf>,

    /// Decode input instead of encoding
    pub decode: bool,

    /// Use the lowercase alphabet instead of uppercase
    pub lowercase: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = Config::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    config.input = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    config.output = Some(PathBuf::from(&args[i]));
                }
                "--decode" => {
                    config.decode = true;
                }
                "--lowercase" => {
                    config.lowercase = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        Ok(config)
    }
}

fn print_help() {
    println!("rock32: encode or decode Crockford-style base-32 text");
    println!();
    println!("USAGE:");
    println!("    rock32 [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>      Input file (default: stdin, \"-\" = stdin)");
    println!("    --out <PATH>     Output file (default: stdout, \"-\" = stdout)");
    println!("    --decode         Decode input instead of encoding");
    println!("    --lowercase      Use the lowercase alphabet");
    println!("    --help, -h       Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    rock32 --in file.bin                   # Encode a file to stdout");
    println!("    rock32 --decode --in file.r32 --out f  # Decode back into a file");
    println!("    echo hi | rock32 --lowercase           # Encode stdin, lowercase");
    println!();
}
