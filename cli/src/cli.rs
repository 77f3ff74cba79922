use std::{borrow::Cow, fs::File, io::stdin, path::PathBuf, process::exit};

use clap::{Args, Parser, Subcommand};
use console::style;
use ocpi_tariff_model::{
    explain::{explain, ExplainElement},
    lint::lint,
    normalize::normalize,
    ocpi::{tariff::OcpiTariffElement, v211::connector::PowerType},
    types::money::Money,
};
use tabled::{settings::Style, Table, Tabled};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use crate::{error::Error, Result};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Print debug output of the tariff model to standard error.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) {
        init_tracing(self.verbose);

        if let Err(err) = self.command.run() {
            eprintln!("{err}");
            exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not set up logging: {err}");
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a tariff element and print its canonical JSON encoding.
    ///
    /// The canonical encoding leaves out absent or empty restrictions and optional fields that
    /// are not set.
    Encode(ElementArgs),
    /// Show structural warnings for a tariff element.
    Lint(ElementArgs),
    /// Remove redundant components and restrictions from a tariff element and print the
    /// canonical JSON encoding of the result.
    Normalize(ElementArgs),
    /// Show a breakdown of the prices and restrictions of a tariff element.
    Explain(ElementArgs),
    /// Convert a power type between its name and its ordinal.
    PowerType(PowerTypeArgs),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Encode(args) => args.encode(),
            Self::Lint(args) => args.lint(),
            Self::Normalize(args) => args.normalize(),
            Self::Explain(args) => args.explain(),
            Self::PowerType(args) => args.run(),
        }
    }
}

#[derive(Debug, Args)]
pub struct ElementArgs {
    /// A path to the tariff element in json format.
    ///
    /// If no path is provided the element is read from standard in.
    #[arg(short = 'e', long)]
    element: Option<PathBuf>,
}

impl ElementArgs {
    fn element_name(&self) -> Cow<'_, str> {
        self.element
            .as_ref()
            .map_or("<stdin>".into(), |path| path.to_string_lossy())
    }

    fn load(&self) -> Result<OcpiTariffElement> {
        let element = if let Some(path) = &self.element {
            let file = File::open(path).map_err(|e| Error::file(path.clone(), e))?;
            serde_json::from_reader(&file)
                .map_err(|e| Error::deserialize(path.display(), "tariff element", e))?
        } else {
            let mut stdin = stdin().lock();
            serde_json::from_reader(&mut stdin)
                .map_err(|e| Error::deserialize("<stdin>", "tariff element", e))?
        };

        debug!(element = %self.element_name(), "loaded tariff element");

        Ok(element)
    }

    fn encode(&self) -> Result<()> {
        let element = self.load()?;
        println!("{}", element.to_json_string()?);

        Ok(())
    }

    fn normalize(&self) -> Result<()> {
        let element = self.load()?;
        println!("{}", normalize(&element).to_json_string()?);

        Ok(())
    }

    fn lint(&self) -> Result<()> {
        let element = self.load()?;
        let warnings = lint(&element);

        println!("{} `{}`", style("Linting").green(), self.element_name());

        if warnings.is_empty() {
            println!("{}", style("No warnings").green());
        }

        for warning in warnings {
            println!("{} {warning}", style("warning:").yellow());
        }

        Ok(())
    }

    fn explain(&self) -> Result<()> {
        let element = self.load()?;
        let ExplainElement {
            components,
            restrictions,
        } = explain(&element);

        println!("{} `{}`", style("Explaining").green(), self.element_name());

        let rows = [
            PriceRow::new("Energy", "per kWh", components.energy),
            PriceRow::new("Time", "per hour", components.time),
            PriceRow::new("Parking time", "per hour", components.parking_time),
            PriceRow::new("Flat", "once", components.flat),
        ];

        println!("{}", Table::new(rows).with(Style::modern()));

        if restrictions.is_empty() {
            println!("Applies without restrictions");
        }

        for (index, clauses) in restrictions.iter().enumerate() {
            let clauses = if clauses.is_empty() {
                "always".to_owned()
            } else {
                clauses.join(" and ")
            };

            println!("{} {clauses}", style(format!("Restriction {index}:")).bold());
        }

        Ok(())
    }
}

#[derive(Debug, Tabled)]
struct PriceRow {
    dimension: &'static str,
    unit: &'static str,
    #[tabled(rename = "price (excl. VAT)")]
    price: String,
}

impl PriceRow {
    fn new(dimension: &'static str, unit: &'static str, price: Option<Money>) -> Self {
        Self {
            dimension,
            unit,
            price: price.map_or("<none>".into(), |price| price.to_string()),
        }
    }
}

#[derive(Debug, Args)]
pub struct PowerTypeArgs {
    /// A power type name like `AC_3_PHASE` or an ordinal like `2`.
    value: String,
}

impl PowerTypeArgs {
    fn run(&self) -> Result<()> {
        let output = if let Ok(ordinal) = self.value.parse::<u8>() {
            PowerType::try_from(ordinal)?.name().to_owned()
        } else {
            self.value.parse::<PowerType>()?.ordinal().to_string()
        };

        println!("{output}");

        Ok(())
    }
}
