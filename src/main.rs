use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use jollaicon::{decode_png, encode_png, shape, BackgroundColor, CornerFlags};
use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[clap(
    name = "jollaicon",
    version,
    disable_version_flag = true,
    about = "Easy way to shape your PNG icon to Sailfish OS style",
    after_help = "Use `-` as <INPUT> or <OUTPUT> to read from stdin or write to stdout."
)]
struct Args {
    /// Path to your icon file (PNG format only).
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (PNG format).
    #[clap(value_name = "OUTPUT")]
    output: PathBuf,

    /// Make the top left corner a right angle instead of round
    #[clap(short = '1', long)]
    top_left: bool,

    /// Make the top right corner a right angle instead of round
    #[clap(short = '2', long)]
    top_right: bool,

    /// Make the bottom right corner a right angle instead of round
    #[clap(short = '3', long)]
    bottom_right: bool,

    /// Make the bottom left corner a right angle instead of round
    #[clap(short = '4', long)]
    bottom_left: bool,

    /// Fill color for the transparent part of the icon, as `(r, g, b)`,
    /// `(r, g, b, alpha)` or a CSS color. White when no color is given.
    #[clap(
        short,
        long,
        value_name = "COLOR",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "white"
    )]
    fill: Option<BackgroundColor>,

    /// Don't print progress messages
    #[clap(short, long)]
    quiet: bool,

    /// Print version
    #[clap(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Args {
    fn corner_flags(&self) -> CornerFlags {
        CornerFlags {
            top_left: self.top_left,
            top_right: self.top_right,
            bottom_right: self.bottom_right,
            bottom_left: self.bottom_left,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let bg = args.fill.unwrap_or_default();

    if !args.quiet {
        eprintln!("Shaping {}...", display_name(&args.input));
    }

    let bytes = read_input(&args.input)?;
    let source = decode_png(&bytes)
        .with_context(|| format!("Failed to load icon {}", display_name(&args.input)))?;
    let shaped = shape(&source, args.corner_flags(), bg)
        .with_context(|| format!("Failed to shape icon {}", display_name(&args.input)))?;

    write_output(&args.output, |w| encode_png(&shaped, w).map_err(Into::into))
        .with_context(|| format!("Failed to write {}", display_name(&args.output)))?;

    if !args.quiet {
        eprintln!(
            "✓ Wrote {} ({}x{})",
            display_name(&args.output),
            shaped.width(),
            shaped.height()
        );
    }
    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn display_name(path: &Path) -> String {
    if is_stdio(path) {
        "<stdio>".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    if is_stdio(path) {
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Failed to read icon from stdin")?;
    } else {
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }
    Ok(bytes)
}

// Only called once the icon is shaped: a decode failure never creates <OUTPUT>.
fn write_output<F>(path: &Path, encode: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    if is_stdio(path) {
        let mut out = BufWriter::new(io::stdout().lock());
        encode(&mut out)?;
        out.flush()?;
    } else {
        let mut out = BufWriter::new(File::create(path).context("Failed to create PNG file")?);
        encode(&mut out)?;
        out.flush()?;
    }
    Ok(())
}
