use std::path::PathBuf;
use std::process;

use clap::{ArgEnum, Parser};
use icon_resizer::{icon_file_name, IconResizer};

/// A command line tool for generating square PNG icon assets from a source image.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The source image
    #[clap(short, long, default_value = "icons/icon.png")]
    input: PathBuf,

    // Directory the resized icons are written into
    #[clap(short, long, default_value = "icons")]
    output: PathBuf,

    // Which fixed set of sizes to produce
    #[clap(short, long, arg_enum, default_value_t)]
    set: IconSet,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
enum IconSet {
    Extension,
    Toolbar,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::Extension
    }
}

impl IconSet {
    fn sizes(self) -> &'static [u32] {
        match self {
            IconSet::Extension => &[16, 32, 48, 128],
            IconSet::Toolbar => &[24, 38],
        }
    }
}

fn main() {
    let args = Args::parse();

    let resizer = match IconResizer::open(&args.input) {
        Ok(resizer) => resizer,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let (width, height) = resizer.source_size();
    println!("Source image: {}x{} pixels", width, height);

    let mut produced = Vec::new();
    for &size in args.set.sizes() {
        match resizer.write_icon(&args.output, size) {
            Ok(icon) => {
                println!("Generated: {} ({}x{})", icon_file_name(size), size, size);
                produced.push(icon);
            }
            Err(e) => {
                eprintln!("Error generating icons: {}", e);
                process::exit(1);
            }
        }
    }

    println!();
    println!("All {} icon sizes generated successfully", produced.len());
    println!("Files created:");
    for icon in &produced {
        println!("  - {} ({} bytes)", icon_file_name(icon.size), icon.bytes);
    }
}
