use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use makefont::{
    bitmap::{DEFAULT_GLYPH_HEIGHT, GLYPH_WIDTH},
    convert_str, ArrayDecl, BitmapFont, ConvertOptions, FontTable, RowMode,
};
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::console::render_to_text;
mod console;

#[derive(Parser)]
#[command(name = "makefont", about = "Bitmap font table generator")]
struct Cli {
    /// Log debug events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Args)]
struct Source {
    /// Font source: two header lines, then `.`/`*` rows and `char` markers
    #[arg(short, long, default_value = "hankaku.txt")]
    input: String,
    /// Ignore characters other than '.' and '*' in glyph rows
    #[arg(long)]
    lenient: bool,
}

impl Source {
    fn mode(&self) -> RowMode {
        if self.lenient {
            RowMode::Lenient
        } else {
            RowMode::Strict
        }
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.input).with_context(|| format!("failed to read {}", self.input))
    }

    fn load(&self) -> Result<FontTable> {
        let text = self.read()?;
        FontTable::parse_str(&text, self.mode())
            .with_context(|| format!("failed to parse {}", self.input))
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Convert a font source into a C array initializer
    Convert {
        #[command(flatten)]
        source: Source,
        /// Output file, `-` for stdout
        #[arg(short, long, default_value = "hankaku.c")]
        output: String,
        #[arg(long, default_value = "hankaku")]
        name: String,
        #[arg(long, default_value_t = 4096)]
        len: usize,
    },
    /// Inspect a font source
    Inspect {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = DEFAULT_GLYPH_HEIGHT)]
        height: usize,
    },
    /// Preview text rendered with a font source
    Render {
        #[command(flatten)]
        source: Source,
        #[arg(short, long)]
        text: String,
        #[arg(long, default_value_t = DEFAULT_GLYPH_HEIGHT)]
        height: usize,
        #[arg(long, default_value = "#")]
        on: char,
        #[arg(long, default_value = " ")]
        off: char,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn write_output(output: &str, text: &str) -> Result<()> {
    if output == "-" {
        println!("{text}");
        return Ok(());
    }
    fs::write(output, text).with_context(|| format!("failed to write {output}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Cmd::Convert {
            source,
            output,
            name,
            len,
        } => {
            let options = ConvertOptions {
                decl: ArrayDecl::new(name, len),
                mode: source.mode(),
            };
            let array = convert_str(&source.read()?, &options)
                .with_context(|| format!("failed to convert {}", source.input))?;
            write_output(&output, &array)?;
            info!(
                input = source.input.as_str(),
                output = output.as_str(),
                "converted"
            );
        }
        Cmd::Inspect { source, height } => {
            let table = source.load()?;
            let font = BitmapFont::from_table(&table, height)?;
            let groups = table.groups();
            println!("Font source: {}", source.input);
            println!("  Values: {}", table.value_count());
            println!("  Groups: {}", groups.len());
            println!(
                "  Glyphs: {} ({}x{})",
                font.glyph_count(),
                GLYPH_WIDTH,
                font.glyph_height()
            );
            if table.value_count() % height != 0 {
                println!(
                    "  Trailing rows: {} (incomplete glyph)",
                    table.value_count() % height
                );
            }
        }
        Cmd::Render {
            source,
            text,
            height,
            on,
            off,
        } => {
            let table = source.load()?;
            let font = BitmapFont::from_table(&table, height)?;
            println!("{}", render_to_text(&font, &text, on, off)?);
        }
    }
    Ok(())
}
