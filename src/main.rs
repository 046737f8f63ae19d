use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use greenfolio::cli::explore::Position;
use greenfolio::core::fund::FundType;
use greenfolio::core::impact::ImpactMetrics;
use greenfolio::core::log::init_logging;
use greenfolio::seed::SeedKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SeedTarget {
    Funds,
    Bonds,
    Invits,
    All,
}

impl SeedTarget {
    fn kinds(self) -> Vec<SeedKind> {
        match self {
            SeedTarget::Funds => vec![SeedKind::Funds],
            SeedTarget::Bonds => vec![SeedKind::Bonds],
            SeedTarget::Invits => vec![SeedKind::Invits],
            SeedTarget::All => SeedKind::ALL.to_vec(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Load the built-in catalog into the store
    Seed {
        #[arg(value_enum, default_value = "all")]
        target: SeedTarget,
    },
    /// List stored funds
    Discover {
        /// Fund type: GREEN_FUND, GREEN_BOND or INVIT
        #[arg(short = 't', long = "type", conflicts_with = "link")]
        fund_type: Option<FundType>,
        /// Discover link, e.g. "/discover?type=INVIT"
        #[arg(short, long)]
        link: Option<String>,
    },
    /// Show fund categories
    Categories,
    /// Show the explore carousel
    Explore {
        /// Container width
        #[arg(short, long, default_value_t = 320.0, allow_negative_numbers = true)]
        width: f64,
        /// Horizontal scroll position
        #[arg(
            short,
            long,
            default_value_t = 0.0,
            conflicts_with = "goto",
            allow_negative_numbers = true
        )]
        scroll: f64,
        /// Jump to the card at this index
        #[arg(short, long)]
        goto: Option<usize>,
    },
    /// Show impact metrics
    Impact {
        /// kg CO2 avoided
        #[arg(allow_negative_numbers = true)]
        co2_avoided: f64,
        /// kWh clean energy generated
        #[arg(allow_negative_numbers = true)]
        clean_energy: f64,
        /// Trees equivalent
        trees: u64,
    },
    /// Extract text from a PDF or image
    Extract {
        path: PathBuf,
        /// Declared MIME type of the file
        #[arg(short, long)]
        mime: Option<String>,
    },
}

impl TryFrom<Commands> for greenfolio::AppCommand {
    type Error = anyhow::Error;

    fn try_from(cmd: Commands) -> Result<greenfolio::AppCommand> {
        Ok(match cmd {
            Commands::Seed { target } => greenfolio::AppCommand::Seed(target.kinds()),
            Commands::Discover { fund_type, link } => {
                let fund_type = match link {
                    Some(link) => {
                        Some(greenfolio::core::category::DiscoverLink::parse(&link)?.fund_type())
                    }
                    None => fund_type,
                };
                greenfolio::AppCommand::Discover(fund_type)
            }
            Commands::Categories => greenfolio::AppCommand::Categories,
            Commands::Explore {
                width,
                scroll,
                goto,
            } => greenfolio::AppCommand::Explore {
                container_width: width,
                position: goto.map_or(Position::Scroll(scroll), Position::Goto),
            },
            Commands::Impact {
                co2_avoided,
                clean_energy,
                trees,
            } => greenfolio::AppCommand::Impact(ImpactMetrics {
                co2_avoided,
                clean_energy_generated: clean_energy,
                trees_equivalent: trees,
            }),
            Commands::Extract { path, mime } => greenfolio::AppCommand::Extract {
                path,
                mime_type: mime,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => greenfolio::cli::setup::setup(),
        Some(cmd) => match greenfolio::AppCommand::try_from(cmd) {
            Ok(command) => greenfolio::run_command(command, cli.config_path.as_deref()).await,
            Err(e) => Err(e),
        },
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenfolio::AppCommand;

    fn parse(args: &[&str]) -> AppCommand {
        let cli = Cli::try_parse_from(args).unwrap();
        AppCommand::try_from(cli.command.unwrap()).unwrap()
    }

    #[test]
    fn test_explore_accepts_negative_scroll() {
        assert_eq!(
            parse(&["greenfolio", "explore", "--scroll", "-50"]),
            AppCommand::Explore {
                container_width: 320.0,
                position: Position::Scroll(-50.0),
            }
        );
        assert!(matches!(
            parse(&["greenfolio", "explore", "-w", "-10", "-s", "-1.5"]),
            AppCommand::Explore { container_width, position: Position::Scroll(scroll) }
                if container_width == -10.0 && scroll == -1.5
        ));
    }

    #[test]
    fn test_impact_accepts_negative_values() {
        assert_eq!(
            parse(&["greenfolio", "impact", "-1.5", "-20", "3"]),
            AppCommand::Impact(ImpactMetrics {
                co2_avoided: -1.5,
                clean_energy_generated: -20.0,
                trees_equivalent: 3,
            })
        );
    }

    #[test]
    fn test_seed_defaults_to_all_kinds() {
        assert_eq!(
            parse(&["greenfolio", "seed"]),
            AppCommand::Seed(SeedKind::ALL.to_vec())
        );
        assert_eq!(
            parse(&["greenfolio", "seed", "bonds"]),
            AppCommand::Seed(vec![SeedKind::Bonds])
        );
    }
}
