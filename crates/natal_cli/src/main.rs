use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use natal_facts::{CelestialBody, FactStoreConfig, InMemoryFactStore, ZodiacSign};
use natal_resolver::{ChartPlacement, Language, NatalChart, Resolver, Topic};

/// Optional dotenv file read before the environment.
const DEV_VARS: &str = ".dev.vars";

#[derive(Parser)]
#[command(name = "natal", about = "Classical dignity, sect and Hayz interpreter")]
struct Cli {
    /// JSON fact sheet (default: $NATAL_FACTS_PATH, then the built-in classical tables)
    #[arg(long, global = true)]
    facts: Option<PathBuf>,
    /// Output language
    #[arg(long, global = true, value_enum, default_value = "en", env = "NATAL_LANG")]
    lang: LangArg,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    En,
    Ko,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Language::English,
            LangArg::Ko => Language::Korean,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret one body in a sign and house
    Interpret {
        /// Body name (Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn)
        #[arg(long)]
        body: String,
        /// Sign name (Aries .. Pisces)
        #[arg(long)]
        sign: String,
        /// House number (1-12)
        #[arg(long)]
        house: u8,
        /// Night chart (default: day)
        #[arg(long)]
        night: bool,
    },
    /// Prose context for every placement in a chart file
    Chart {
        /// Chart JSON with `placements` and `ascendant_deg`
        #[arg(long)]
        file: PathBuf,
        /// Force a day chart
        #[arg(long, conflicts_with = "night")]
        day: bool,
        /// Force a night chart
        #[arg(long)]
        night: bool,
    },
    /// Reception or rejection of a transiting body by a natal sign
    Reception {
        /// Transiting body
        #[arg(long)]
        body: String,
        /// Sign of the natal point
        #[arg(long)]
        sign: String,
    },
    /// Topic-focused context from a chart file
    Consult {
        /// LOVE, MONEY, WORK, EXAM, MOVE or GENERAL
        #[arg(long, default_value = "GENERAL")]
        topic: String,
        /// Chart JSON with `placements` and `ascendant_deg`
        #[arg(long)]
        file: PathBuf,
    },
    /// Dignity label of a body in a sign
    Dignity {
        #[arg(long)]
        body: String,
        #[arg(long)]
        sign: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

/// An explicit `--facts` wins over the environment.
fn store_config(facts: Option<PathBuf>) -> FactStoreConfig {
    match facts {
        Some(path) => FactStoreConfig::with_sheet(path),
        None => FactStoreConfig::from_env(),
    }
}

fn open_store(facts: Option<PathBuf>) -> InMemoryFactStore {
    store_config(facts)
        .open()
        .unwrap_or_else(|e| fail(format!("Cannot load facts: {e}")))
}

fn require_body(name: &str) -> CelestialBody {
    CelestialBody::from_name(name).unwrap_or_else(|| {
        fail(format!(
            "Unknown body '{name}'. Use one of: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn."
        ))
    })
}

fn require_sign(name: &str) -> ZodiacSign {
    ZodiacSign::from_name(name)
        .unwrap_or_else(|| fail(format!("Unknown sign '{name}'. Use Aries .. Pisces.")))
}

fn load_chart(path: &Path) -> NatalChart {
    let json = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Cannot read chart {}: {e}", path.display())));
    serde_json::from_str(&json)
        .unwrap_or_else(|e| fail(format!("Invalid chart {}: {e}", path.display())))
}

fn main() {
    match dotenvy::from_filename(DEV_VARS) {
        Err(e) if !e.not_found() => eprintln!("Ignoring {DEV_VARS}: {e}"),
        _ => {}
    }
    init_tracing();

    let cli = Cli::parse();
    let resolver = Resolver::new(open_store(cli.facts)).with_language(cli.lang.into());

    let output = match cli.command {
        Commands::Interpret {
            body,
            sign,
            house,
            night,
        } => resolver.interpret(&ChartPlacement::new(body, sign, house, !night)),

        Commands::Chart { file, day, night } => {
            let chart = load_chart(&file);
            let is_day_chart = if day || night {
                day
            } else {
                chart.is_day_chart()
            };
            resolver.chart_context(&chart, is_day_chart)
        }

        Commands::Reception { body, sign } => resolver
            .reception(require_body(&body), require_sign(&sign))
            .map(|meta| meta.tag),

        Commands::Consult { topic, file } => {
            let chart = load_chart(&file);
            resolver.consultation_context(Topic::parse(&topic), &chart)
        }

        Commands::Dignity { body, sign } => resolver
            .dignity(&body, &sign)
            .map(|d| d.label(resolver.language()).to_string()),
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format!("Resolution failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facts_flag_overrides_environment() {
        let cli = Cli::parse_from([
            "natal", "--facts", "sheet.json", "dignity", "--body", "Sun", "--sign", "Leo",
        ]);
        assert_eq!(store_config(cli.facts), FactStoreConfig::with_sheet("sheet.json"));
    }

    #[test]
    fn facts_flag_is_optional() {
        let cli = Cli::parse_from(["natal", "dignity", "--body", "Sun", "--sign", "Leo"]);
        assert_eq!(cli.facts, None);
    }
}
