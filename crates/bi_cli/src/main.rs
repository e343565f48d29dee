use clap::Parser;

use bi_analysis::{analyze_brand, create_provider};
use bi_core::{BrandReport, ReportCadence, ReportConfig, Result};
use bi_insights::Topic;
use bi_storage::create_store;

#[derive(Parser, Debug)]
#[command(author, version, about = "Brand insights analysis", long_about = None)]
pub struct Cli {
    /// Analysis provider: canned (offline) or remote
    #[arg(long, default_value = "canned")]
    provider: String,
    /// API key for the remote provider
    #[arg(long, env = "BI_API_KEY")]
    api_key: Option<String>,
    /// Base URL override for the remote provider
    #[arg(long)]
    base_url: Option<String>,
    /// Report store backend
    #[arg(long, default_value = "memory")]
    store: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze a brand and print the report
    Analyze {
        brand: String,
        /// Comma-separated competitor names
        #[arg(long, value_delimiter = ',')]
        competitors: Vec<String>,
        /// Print the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// List the analysis topics
    Topics,
    /// Show or update the scheduled-report configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "3000")]
        port: u16,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ConfigCommands {
    Show,
    Set {
        brand: String,
        #[arg(long, value_delimiter = ',')]
        competitors: Vec<String>,
        /// Report cadence: daily, weekly or monthly
        #[arg(long, default_value = "weekly")]
        cadence: String,
        #[arg(long)]
        email: Option<String>,
    },
}

fn print_report(report: &BrandReport) {
    println!("Brand: {}", report.brand);
    if let Some(logo) = &report.logo_url {
        println!("Logo:  {}", logo);
    }
    for section in &report.sections {
        println!("\n## {}", section.title);
        for topic in &section.topics {
            println!("  {}", topic.headline);
            for insight in &topic.insights {
                println!("    - {}", insight);
            }
        }
    }
    if !report.news.is_empty() {
        println!("\n## news");
        for item in &report.news {
            match &item.url {
                Some(url) => println!("  {} - {}", item.title, url),
                None => println!("  {}", item.title),
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = create_store(&cli.store)?;

    match cli.command {
        Commands::Analyze {
            brand,
            competitors,
            json,
        } => {
            let provider = create_provider(&cli.provider, cli.api_key, cli.base_url)?;
            let report = analyze_brand(provider.as_ref(), &brand, &competitors).await?;
            store.store_report(&report).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Topics => {
            for topic in Topic::ALL {
                println!("{}", topic);
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => match store.load_config().await? {
                Some(config) => println!("{}", serde_json::to_string_pretty(&config)?),
                None => println!("No report configuration saved"),
            },
            ConfigCommands::Set {
                brand,
                competitors,
                cadence,
                email,
            } => {
                let config = ReportConfig {
                    brand,
                    competitors,
                    cadence: cadence.parse()?,
                    email,
                };
                store.store_config(&config).await?;
                println!("Saved configuration for {}", config.brand);
            }
        },
        Commands::Serve { port } => {
            let provider = create_provider(&cli.provider, cli.api_key, cli.base_url)?;
            bi_web::serve(bi_web::AppState { provider, store }, port).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from(["bi", "analyze", "Acme", "--competitors", "Globex,Initech"])
            .unwrap();
        match cli.command {
            Commands::Analyze {
                brand, competitors, ..
            } => {
                assert_eq!(brand, "Acme");
                assert_eq!(competitors, vec!["Globex", "Initech"]);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_parse_cadence() {
        assert_eq!("daily".parse::<ReportCadence>().unwrap(), ReportCadence::Daily);
        assert_eq!(
            "monthly".parse::<ReportCadence>().unwrap(),
            ReportCadence::Monthly
        );
        assert!("hourly".parse::<ReportCadence>().is_err());
    }
}
