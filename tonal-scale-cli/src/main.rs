use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tonal_scale::strips::blend_distribution;
use tonal_scale::{
    find_closest, format_contrast_ratio, generate_tonal_scale, get_contrast_ratio, hex_to_rgb,
    normalize_hex, rgb_to_hsv, BlendMode, ContrastCandidate, Direction, TonalError, TonalScaleParams, TonalScaleSnapshot,
    LARGE_TEXT, NORMAL_TEXT,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "tonalscale",
    about = "Perceptual tonal color ramps from a single base color",
    version,
    author
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the 101-step ramp
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Share URL embedded in SVG output (defaults to the params query)
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the WCAG contrast ratio of two colors
    Contrast {
        /// First color (hex)
        first: String,

        /// Second color (hex)
        second: String,
    },

    /// Show the nearest 3:1 and 4.5:1 partners of a step
    Pairs {
        /// Step index (0-100)
        index: usize,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Print the sampled blend envelope
    Curve {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Print the resolved params as JSON and as a query string
    Params {
        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Svg,
}

/// Params are resolved in order: defaults, `--params`, `--query`, then the
/// individual flags.
#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// Base color (hex)
    #[arg(short, long)]
    color: Option<String>,

    /// Blend color (hex)
    #[arg(short, long)]
    blend: Option<String>,

    /// Blend mode (darken, multiply, colorburn, lighten, screen, colordodge,
    /// overlay, softlight, hardlight, vividlight, hue)
    #[arg(short, long)]
    mode: Option<BlendMode>,

    /// Blend strength (0-100)
    #[arg(long)]
    strength: Option<f64>,

    /// Envelope peak position (-50 to 50)
    #[arg(long, allow_hyphen_values = true)]
    middle: Option<f64>,

    /// Envelope narrowing (0-100)
    #[arg(long)]
    spread: Option<f64>,

    /// Saturation boost below the base (0-100)
    #[arg(long)]
    sat_darker: Option<f64>,

    /// Saturation boost above the base (0-100)
    #[arg(long)]
    sat_lighter: Option<f64>,

    /// JSON params file
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// URL query string (e.g. "colorHex=336699&blendMode=overlay")
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,
}

impl ParamArgs {
    fn resolve(&self) -> Result<TonalScaleParams> {
        let mut params = TonalScaleParams::default();

        if let Some(path) = &self.params {
            let payload = fs::read_to_string(path)
                .with_context(|| format!("Failed to read params file {}", path.display()))?;
            params = TonalScaleParams::import_json(&payload, &params)
                .with_context(|| format!("Failed to load params from {}", path.display()))?;
        }

        if let Some(query) = &self.query {
            params = TonalScaleParams::from_query_string(query, &params);
        }

        if let Some(color) = &self.color {
            params.color_hex =
                normalize_hex(color).ok_or_else(|| TonalError::InvalidHex(color.clone()))?;
        }
        if let Some(blend) = &self.blend {
            params = params.with_blend_hex(blend)?;
        }
        if let Some(mode) = self.mode {
            params.blend_mode = mode;
        }
        if let Some(strength) = self.strength {
            params.blend_strength = strength;
        }
        if let Some(middle) = self.middle {
            params.middle = middle;
        }
        if let Some(spread) = self.spread {
            params.spread = spread;
        }
        if let Some(sat_darker) = self.sat_darker {
            params.sat_darker = sat_darker;
        }
        if let Some(sat_lighter) = self.sat_lighter {
            params.sat_lighter = sat_lighter;
        }

        params.validate()?;
        debug!(query = %params.to_query_string(), "resolved params");
        Ok(params)
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tonal_scale=debug,tonalscale=debug"
    } else {
        "tonal_scale=info,tonalscale=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn describe(label: &str, candidate: Option<&ContrastCandidate>) -> String {
    match candidate {
        Some(candidate) => format!(
            "{label:<14} {} (step {}, {})",
            candidate.hex,
            candidate.index,
            format_contrast_ratio(candidate.ratio)
        ),
        None => format!("{label:<14} none"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            params,
            format,
            output,
            url,
        } => {
            let params = params.resolve()?;
            let snapshot = TonalScaleSnapshot::from_params(params)?;

            let rendered = match format {
                OutputFormat::Text => {
                    let mut lines = Vec::with_capacity(snapshot.scale.color_scale.len());
                    for step in &snapshot.scale.color_scale {
                        if step.index == snapshot.scale.luminance {
                            lines.push(format!("{:>3} {}  base", step.index, step.hex));
                        } else {
                            lines.push(format!("{:>3} {}", step.index, step.hex));
                        }
                    }
                    lines.join("\n")
                }
                OutputFormat::Json => serde_json::to_string_pretty(&snapshot)?,
                OutputFormat::Svg => {
                    let url = url.unwrap_or_else(|| {
                        format!("?{}", snapshot.params.to_query_string())
                    });
                    snapshot.to_svg(&url)
                }
            };

            match output {
                Some(path) => {
                    fs::write(&path, rendered + "\n")
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Tonal scale written to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }

        Commands::Contrast { first, second } => {
            let ratio = get_contrast_ratio(&first, &second)?;
            println!("{}", format_contrast_ratio(ratio));

            let verdict = |threshold: f64| if ratio >= threshold { "pass" } else { "fail" };
            println!("AA large text:  {}", verdict(LARGE_TEXT));
            println!("AA normal text: {}", verdict(NORMAL_TEXT));
        }

        Commands::Pairs { index, params } => {
            let params = params.resolve()?;
            let scale = generate_tonal_scale(&params)?;
            let step = scale.step(index)?;
            let steps = scale.steps();

            let (h, s, v) = rgb_to_hsv(hex_to_rgb(&step.hex)?).to_percent();
            println!("{:>3} {}  hsv({h}, {s}%, {v}%)", step.index, step.hex);
            for (label, ratio, direction) in [
                ("darker 3:1", LARGE_TEXT, Direction::Darker),
                ("darker 4.5:1", NORMAL_TEXT, Direction::Darker),
                ("lighter 3:1", LARGE_TEXT, Direction::Lighter),
                ("lighter 4.5:1", NORMAL_TEXT, Direction::Lighter),
            ] {
                let candidate = find_closest(index, steps, ratio, direction);
                println!("{}", describe(label, candidate.as_ref()));
            }
        }

        Commands::Curve { params } => {
            let params = params.resolve()?;
            let scale = generate_tonal_scale(&params)?;
            let distribution = blend_distribution(&params, &scale);

            println!(
                "# width {}% line {}",
                distribution.width_percent, distribution.line_color
            );
            for (x, y) in distribution.x.iter().zip(&distribution.y) {
                println!("{x} {y:.4}");
            }
        }

        Commands::Params { params } => {
            let params = params.resolve()?;
            println!("{}", serde_json::to_string_pretty(&params)?);
            println!("?{}", params.to_query_string());
        }
    }

    Ok(())
}
