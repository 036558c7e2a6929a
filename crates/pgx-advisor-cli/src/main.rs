//! PGx Advisor CLI
//!
//! Fill the advisory form from the command line and print the result.
//!
//! Usage:
//!   pgx-advisor advise --drug <drug> [--gene <gene>] [--phenotype <phenotype>]
//!   pgx-advisor demo
//!   pgx-advisor rules
//!   pgx-advisor phenotypes <gene>

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use pgx_advisor_core::{AdvisoryReport, FormState, Normalizer, Resolver};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "pgx-advisor")]
#[command(version)]
#[command(about = "Pharmacogenomic drug/gene advisories (demo only, not clinical advice)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to $PGX_ADVISOR_CONFIG or ./pgx-advisor.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a drug/gene/phenotype selection
    Advise {
        /// Drug name or brand (e.g. "Clopidogrel", "5-FU", "Xeloda")
        #[arg(short, long)]
        drug: String,

        /// Genetic marker (CYP2C19, TPMT, DPYD, BRCA1)
        #[arg(short, long, default_value = "")]
        gene: String,

        /// Phenotype for the gene (e.g. "Poor metabolizer", "low")
        #[arg(short, long, default_value = "")]
        phenotype: String,

        /// Patient name (optional, not used by the rules)
        #[arg(long, default_value = "")]
        patient_name: String,

        /// Patient age (optional, not used by the rules)
        #[arg(long, default_value = "")]
        age: String,

        /// Clinical condition (optional, not used by the rules)
        #[arg(long, default_value = "")]
        condition: String,
    },

    /// Evaluate the demo patient
    Demo,

    /// List the supported rules
    Rules,

    /// List phenotypes available for a gene
    Phenotypes {
        /// Genetic marker
        gene: String,
    },
}

fn init_logging(config: &Config, verbose: bool) {
    let fallback = if verbose {
        "pgx_advisor=debug,info".to_string()
    } else {
        config.logging.filter.clone()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);
    debug!(?config, "configuration loaded");

    let format = cli.format.unwrap_or(config.output.format);
    let normalizer = Normalizer::new();
    let resolver = Resolver::new();

    match cli.command {
        Commands::Advise {
            drug,
            gene,
            phenotype,
            patient_name,
            age,
            condition,
        } => {
            let mut form = FormState::new();
            form.set_patient_name(patient_name);
            form.set_age(age);
            form.set_condition(condition);

            form.set_drug(normalizer.parse_drug(&drug)?);
            form.set_gene(normalizer.parse_gene(&gene)?);
            let phenotype = normalizer.parse_phenotype(&phenotype, form.gene())?;
            form.set_phenotype(phenotype)?;

            print_report(&AdvisoryReport::from_form_with(&form, &resolver), format)?;
        }

        Commands::Demo => {
            let mut form = FormState::new();
            form.load_demo();
            info!(patient = form.patient_name(), "evaluating demo patient");

            print_report(&AdvisoryReport::from_form_with(&form, &resolver), format)?;
        }

        Commands::Rules => {
            let rules = resolver.supported_rules();
            match format {
                OutputFormat::Text => {
                    println!("Supported rules:");
                    for rule in rules {
                        println!("  - {}", rule);
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
            }
        }

        Commands::Phenotypes { gene } => {
            let Some(gene) = normalizer.parse_gene(&gene)? else {
                bail!("A gene is required");
            };
            let labels: Vec<&str> = gene.phenotypes().iter().map(|p| p.label()).collect();

            match format {
                OutputFormat::Text if labels.is_empty() => {
                    println!("{} has no phenotype classification", gene);
                }
                OutputFormat::Text => {
                    for label in labels {
                        println!("{}", label);
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&labels)?),
            }
        }
    }

    Ok(())
}

fn print_report(report: &AdvisoryReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => {
            let json = report.to_json().context("Failed to serialize report")?;
            println!("{}", json);
        }
    }
    Ok(())
}
