//! Flow Layout CLI
//!
//! Usage:
//!   flow-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -w, --width <PX>          Width offered to the container
//!       --height <PX>         Height offered to the container
//!       --width-mode <MODE>   exact, at-most or unspecified
//!   -m, --height-mode <MODE>  exact, at-most or unspecified
//!   -f, --format <FORMAT>     svg or text
//!   -d, --debug               Draw row bands in SVG output
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use flow_layout::layout::MeasureMode;
use flow_layout::{render_scene, OutputFormat, RenderConfig, Scene, SvgConfig, Viewport};

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Exact,
    AtMost,
    Unspecified,
}

impl From<Mode> for MeasureMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Exact => MeasureMode::Exact,
            Mode::AtMost => MeasureMode::AtMost,
            Mode::Unspecified => MeasureMode::Unspecified,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Text,
}

#[derive(Parser)]
#[command(name = "flow-layout")]
#[command(about = "Lay out a TOML scene in a wrapping flow container")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Width offered to the container (defaults to the scene's viewport)
    #[arg(short, long)]
    width: Option<i32>,

    /// Height offered to the container (defaults to the scene's viewport)
    #[arg(long)]
    height: Option<i32>,

    /// How the width constraint binds
    #[arg(long, value_enum)]
    width_mode: Option<Mode>,

    /// How the height constraint binds
    #[arg(short = 'm', long, value_enum)]
    height_mode: Option<Mode>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    format: Format,

    /// Debug mode: draw padding and row bands
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Command-line sizes override the scene's own viewport
    let defaults = scene.viewport;
    let viewport = Viewport {
        width: cli.width.unwrap_or(defaults.width),
        height: cli.height.unwrap_or(defaults.height),
        width_mode: cli.width_mode.map(MeasureMode::from).unwrap_or(defaults.width_mode),
        height_mode: cli.height_mode.map(MeasureMode::from).unwrap_or(defaults.height_mode),
    };

    let format = match cli.format {
        Format::Svg => OutputFormat::Svg,
        Format::Text => OutputFormat::Text,
    };
    let config = RenderConfig::new()
        .with_viewport(viewport)
        .with_format(format)
        .with_svg(SvgConfig::default().with_debug(cli.debug));

    match render_scene(&scene, &config) {
        Ok(output) => {
            print!("{}", output);
            if format == OutputFormat::Svg {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Flow Layout - wrapping row container

USAGE:
    flow-layout [OPTIONS] [FILE]
    cat scene.toml | flow-layout

OPTIONS:
    -w, --width        Width offered to the container
    --height           Height offered to the container
    --width-mode       exact (default), at-most or unspecified
    -m, --height-mode  exact, at-most or unspecified
    -f, --format       svg (default) or text
    -d, --debug        Draw padding and row bands
    -h, --help         Print help

SCENE FORMAT:
    [layout]
    horizontal_gap = 10
    vertical_gap = 5
    column_count = "auto"       # or a positive integer
    padding = {{ left = 8, right = 8 }}

    [viewport]
    width = 320
    width_mode = "exact"
    height_mode = "at-most"

    [[children]]
    id = "a"
    width = 60                  # integer, "fit" or "fill"
    height = "fit"
    margin = 4                  # or {{ left = 4, top = 2 }}
    content = [60, 40]
    visibility = "visible"      # visible, invisible or gone

Set RUST_LOG=debug to trace the measure and layout passes."#
    );
}
