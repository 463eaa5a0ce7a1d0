use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use rpghud::commands::{self, BarRequest, RenderRequest, SettingsStore};
use rpghud::logging;
use rpghud_overlay::{HudStyle, ScreenMetrics};
use rpghud_types::ElementType;

#[derive(Parser)]
#[command(version, about = "Render and arrange an RPG style HUD")]
struct Cli {
    /// Enable debug logging for rpghud crates
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file to use instead of the platform config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct ScreenArgs {
    /// Display width in pixels
    #[arg(long, default_value_t = 854)]
    width: i32,
    /// Display height in pixels
    #[arg(long, default_value_t = 480)]
    height: i32,
    /// UI scale factor
    #[arg(long, default_value_t = 1)]
    gui_scale: i32,
}

impl ScreenArgs {
    fn metrics(&self) -> ScreenMetrics {
        ScreenMetrics::new(self.width, self.height, self.gui_scale)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Default,
    Texture,
}

impl From<StyleArg> for HudStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Default => HudStyle::Default,
            StyleArg::Texture => HudStyle::Texture,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render one HUD frame to a PNG file
    Render {
        #[arg(short, long)]
        out: PathBuf,
        #[command(flatten)]
        screen: ScreenArgs,
        #[arg(long, value_enum, default_value_t = StyleArg::Default)]
        style: StyleArg,
        #[arg(long, default_value_t = 20.0)]
        health: f32,
        #[arg(long, default_value_t = 20.0)]
        max_health: f32,
        /// Experience progress, 0 to 1
        #[arg(long, default_value_t = 0.0)]
        experience: f32,
        /// Player rides a living mount
        #[arg(long)]
        riding: bool,
        /// Mount jump charge, 0 to 1
        #[arg(long, default_value_t = 0.0)]
        jump: f32,
        /// PNG for the interface atlas (texture style)
        #[arg(long)]
        interface: Option<PathBuf>,
    },
    /// Print the device calls issued for one custom bar
    Trace {
        #[arg(long, default_value_t = 0)]
        x: i32,
        #[arg(long, default_value_t = 0)]
        y: i32,
        #[arg(long, default_value_t = 100)]
        width: i32,
        #[arg(long, default_value_t = 12)]
        height: i32,
        /// Fill percentage
        #[arg(long, default_value_t = 50.0)]
        value: f64,
        /// Base color as hex, e.g. C10000
        #[arg(long, default_value = "C10000", value_parser = parse_hex_color)]
        color: i32,
        #[arg(long)]
        no_outline: bool,
    },
    /// Move an element and save the position
    Move {
        element: ElementType,
        x: i32,
        y: i32,
        #[command(flatten)]
        screen: ScreenArgs,
    },
    /// Reset one element, or all of them, to the default position
    Reset {
        element: Option<ElementType>,
        #[command(flatten)]
        screen: ScreenArgs,
    },
    /// Show the effective layout
    Show {
        #[command(flatten)]
        screen: ScreenArgs,
    },
}

fn parse_hex_color(s: &str) -> Result<i32, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches('#');
    u32::from_str_radix(digits, 16)
        .map(|v| v as i32)
        .map_err(|e| format!("invalid color '{s}': {e}"))
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let store = SettingsStore::new(cli.config);

    match cli.command {
        Commands::Render {
            out,
            screen,
            style,
            health,
            max_health,
            experience,
            riding,
            jump,
            interface,
        } => {
            let request = RenderRequest {
                out,
                screen: screen.metrics(),
                gui_scale: screen.gui_scale,
                style: style.into(),
                player: commands::player_snapshot(health, max_health, experience, riding, jump),
                interface_texture: interface,
            };
            commands::render(&store, &request)
        }
        Commands::Trace {
            x,
            y,
            width,
            height,
            value,
            color,
            no_outline,
        } => {
            let bar = BarRequest {
                x,
                y,
                width,
                height,
                value,
                color,
                outlined: !no_outline,
            };
            for line in commands::trace_bar(&bar) {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Move {
            element,
            x,
            y,
            screen,
        } => commands::move_element(&store, &screen.metrics(), element, x, y),
        Commands::Reset { element, screen } => commands::reset(&store, &screen.metrics(), element),
        Commands::Show { screen } => {
            for line in commands::show(&store, &screen.metrics())? {
                println!("{line}");
            }
            Ok(())
        }
    }
}
