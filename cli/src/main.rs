//! Qrterm CLI - render QR codes as colored blocks in the terminal.

mod input;

use clap::{CommandFactory, Parser};
use terminal_size::{terminal_size, Width};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use qrterm_core::{render, Bitmap, Color, Justify, Level, RenderOptions};

#[cfg(not(windows))]
const AFTER_HELP: &str = "\
Supported front colors: black, red, green, yellow, blue, magenta, cyan, white
Supported background colors: black, red, green, yellow, blue, magenta, cyan, white
Supported error correction levels: L, M, Q, H
Supported justifications: left, center, right";

#[cfg(windows)]
const AFTER_HELP: &str = "\
Supported front colors: black, red, green, yellow, blue, magenta, cyan, white
Supported background colors: black, red, green, yellow, blue, magenta, cyan, white
Supported error correction levels: L, M, Q, H";

#[derive(Parser)]
#[command(name = "qrterm")]
#[command(about = "Render a QR code as colored blocks in the terminal", long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Front color
    #[arg(short, long, default_value = "black")]
    front: String,

    /// Background color
    #[arg(short, long, default_value = "white")]
    back: String,

    /// Error correction level
    #[arg(short, long, default_value = "m")]
    level: String,

    /// QR code justification
    #[cfg(not(windows))]
    #[arg(short, long, default_value = "left")]
    justify: String,

    /// Content to encode; falls back to piped stdin, then a default
    content: Option<String>,
}

impl Cli {
    fn justify(&self) -> &str {
        #[cfg(not(windows))]
        {
            &self.justify
        }
        #[cfg(windows)]
        {
            "left"
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (front, back, level, justify) = match resolve_flags(&cli) {
        Ok(resolved) => resolved,
        Err(err) => {
            // Unsupported flag values print the message and the usage
            // help to stdout, then exit cleanly.
            println!("{err}");
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    let content = match input::resolve_content(cli.content) {
        Ok(content) => content,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let bitmap = match Bitmap::encode(&content, level) {
        Ok(bitmap) => bitmap,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let columns = terminal_columns();
    debug!(columns, %justify, "rendering");

    let opts = RenderOptions {
        front,
        back,
        justify,
        columns,
    };
    print!("{}", render(&bitmap, &opts));

    Ok(())
}

/// Validate the raw flag strings against their enumerated sets.
fn resolve_flags(cli: &Cli) -> qrterm_core::Result<(Color, Color, Level, Justify)> {
    let front: Color = cli.front.parse()?;
    let back: Color = cli.back.parse()?;
    let level: Level = cli.level.parse()?;
    let justify: Justify = cli.justify().parse()?;
    Ok((front, back, level, justify))
}

/// Terminal width in character cells, 0 when there is no terminal.
fn terminal_columns() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => w as usize,
        None => 0,
    }
}
