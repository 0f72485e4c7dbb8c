use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::services::scenario_config::{OverbookingSettings, RoiSettings};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Scenario YAML file with defaults for every parameter
    #[arg(long, global = true, env = "OVERBOOKING_ROI_CONFIG")]
    pub config: Option<String>,
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probability that more ticket holders show up than there are seats
    Overbooking(OverbookingArgs),
    /// Monte Carlo distribution of return on investment
    Roi(RoiArgs),
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Args, Debug, Default)]
pub struct OverbookingArgs {
    /// Seats available
    #[arg(short, long)]
    pub capacity: Option<u32>,
    /// Show-up probability in percent (0-100)
    #[arg(short = 'p', long)]
    pub show_up: Option<f64>,
    /// Tickets sold; its risk is highlighted in the report
    #[arg(short, long)]
    pub sold: Option<u32>,
    /// Last ticket count of the risk table (defaults to --sold)
    #[arg(short, long)]
    pub max_sold: Option<u32>,
    /// Acceptable risk in percent used for the recommended limit
    #[arg(short, long, conflicts_with = "no_threshold")]
    pub threshold: Option<f64>,
    /// Skip the recommended limit
    #[arg(long)]
    pub no_threshold: bool,
    /// Output file for the full result
    #[arg(short, long)]
    pub output: Option<String>,
    /// Output format of --output
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
    /// PNG file for the risk curve chart
    #[arg(long)]
    pub plot: Option<String>,
}

impl OverbookingArgs {
    /// Flags given on the command line override the scenario file.
    pub fn apply_to(&self, settings: &mut OverbookingSettings) {
        if let Some(capacity) = self.capacity {
            settings.capacity = capacity;
        }
        if let Some(show_up) = self.show_up {
            settings.show_up_percent = show_up;
        }
        if let Some(sold) = self.sold {
            settings.sold = sold;
            if self.max_sold.is_none() {
                settings.max_sold = None;
            }
        }
        if let Some(max_sold) = self.max_sold {
            settings.max_sold = Some(max_sold);
        }
        if let Some(threshold) = self.threshold {
            settings.risk_threshold_percent = Some(threshold);
        }
        if self.no_threshold {
            settings.risk_threshold_percent = None;
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct RoiArgs {
    /// Initial investment
    #[arg(long)]
    pub investment: Option<f64>,
    /// Expected additional revenue
    #[arg(long, allow_negative_numbers = true)]
    pub revenue: Option<f64>,
    /// Standard deviation of the revenue
    #[arg(long)]
    pub std_dev: Option<f64>,
    /// Annual operating cost
    #[arg(long)]
    pub operating_cost: Option<f64>,
    /// Target ROI in percent
    #[arg(long, allow_negative_numbers = true)]
    pub target: Option<f64>,
    /// Number of Monte Carlo samples
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,
    /// Seed of the random generator
    #[arg(long)]
    pub seed: Option<u64>,
    /// Draw samples on all cores (same result as a sequential run)
    #[arg(long)]
    pub parallel: bool,
    /// Output file for the summary and every sample
    #[arg(short, long)]
    pub output: Option<String>,
    /// Output format of --output
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
    /// PNG file for the ROI histogram
    #[arg(long)]
    pub histogram: Option<String>,
}

impl RoiArgs {
    pub fn apply_to(&self, settings: &mut RoiSettings) {
        if let Some(investment) = self.investment {
            settings.investment = investment;
        }
        if let Some(revenue) = self.revenue {
            settings.expected_revenue = revenue;
        }
        if let Some(std_dev) = self.std_dev {
            settings.revenue_std_dev = std_dev;
        }
        if let Some(operating_cost) = self.operating_cost {
            settings.operating_cost = operating_cost;
        }
        if let Some(target) = self.target {
            settings.target_roi_percent = target;
        }
        if let Some(samples) = self.samples {
            settings.sample_count = samples;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if self.parallel {
            settings.parallel = true;
        }
    }
}
