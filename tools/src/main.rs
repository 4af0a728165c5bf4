//! projection-runner: command-line savings projection.
//!
//! Usage:
//!   projection-runner -b 1000 -yr 0.07 -md 300 -mdyr 25 -mdm 500 -ny 30
//!   projection-runner -b 1000 -mr 0.005 -md 300 -ta 100000 --no_plot
//!   projection-runner --config options.json -ny 10 --json

use anyhow::{bail, Context, Result};
use projection_core::{
    chart::ChartSeries,
    config::RawOptions,
    engine::{Projection, ProjectionEngine},
};
use std::env;

const DEFAULT_CHART_OUT: &str = "projection_chart.json";

const HELP: &str = "\
  -h    --help                                -> print this message
  -b    --balance                             -> starting balance
  -yr   --yearly_rate                         -> expected yearly growth rate
  -mr   --monthly_rate                        -> same as yearly rate / 12
  -md   --monthly_deposit                     -> monthly contribution to the fund
  -mdyr --monthly_deposit_yearly_rise         -> monthly deposit increase per year
  -mdm  --monthly_deposit_max                 -> maximum monthly deposit (0 = none)
  -yadp --yearly_assumed_dividend_percentage  -> yearly dividend estimate rate
  -ny   --num_years                           -> duration of the analysis
  -ta   --target-amount                       -> run until balance exceeds this; excludes -ny
  -np   --no_plot                             -> don't write chart data
        --config <file>                       -> JSON options file, flags override it
        --chart-out <file>                    -> chart data path (default projection_chart.json)
        --json                                -> print the full projection as JSON";

#[derive(Debug)]
struct RunnerArgs {
    options:   RawOptions,
    json:      bool,
    chart_out: String,
    help:      bool,
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    total_years:   f64,
    gains:         f64,
    projection:    &'a Projection,
    summary_lines: Vec<String>,
}

impl<'a> JsonReport<'a> {
    fn new(projection: &'a Projection) -> Self {
        Self {
            total_years:   projection.total_years(),
            gains:         projection.gains(),
            summary_lines: projection.summary_lines(),
            projection,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("Running at default parameters");
    }

    let runner = parse_args(&args)?;
    if runner.help {
        println!("{HELP}");
        return Ok(());
    }

    if !runner.json {
        println!("{:?}", runner.options);
    }

    let config = runner.options.resolve()?;
    log::debug!("resolved config: {config:?}");
    let projection = ProjectionEngine::run_config(config)?;

    if runner.json {
        println!("{}", serde_json::to_string_pretty(&JsonReport::new(&projection))?);
    } else {
        for line in projection.summary_lines() {
            println!("{line}");
        }
    }

    if runner.options.show_plot {
        let chart = ChartSeries::from_projection(&projection)?;
        chart.write_json(&runner.chart_out)?;
        log::info!("chart data written to {}", runner.chart_out);
    }

    Ok(())
}

/// Apply flags in order, so later rate flags override earlier ones.
/// A `--config` file is loaded first regardless of its position.
fn parse_args(args: &[String]) -> Result<RunnerArgs> {
    let mut runner = RunnerArgs {
        options:   RawOptions::default(),
        json:      false,
        chart_out: DEFAULT_CHART_OUT.to_string(),
        help:      args.iter().any(|a| a == "-h" || a == "--help"),
    };
    if runner.help {
        return Ok(runner);
    }

    if let Some(path) = args.windows(2).find(|w| w[0] == "--config").map(|w| &w[1]) {
        runner.options = RawOptions::load(path)?;
    }

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let opts = &mut runner.options;
        match flag.as_str() {
            "-b" | "--balance" => opts.balance = value(&mut iter, flag)?,
            "-yr" | "--yearly_rate" => opts.set_yearly_rate(value(&mut iter, flag)?),
            "-mr" | "--monthly_rate" => opts.monthly_rate = value(&mut iter, flag)?,
            "-md" | "--monthly_deposit" => opts.monthly_deposit = value(&mut iter, flag)?,
            "-mdyr" | "--monthly_deposit_yearly_rise" => {
                opts.monthly_deposit_yearly_raise = value(&mut iter, flag)?
            }
            "-mdm" | "--monthly_deposit_max" => opts.max_monthly_deposit = value(&mut iter, flag)?,
            "-yadp" | "--yearly_assumed_dividend_percentage" => {
                opts.yearly_assumed_dividend_percentage = value(&mut iter, flag)?
            }
            "-ny" | "--num_years" => opts.num_years = value(&mut iter, flag)?,
            "-ta" | "--target-amount" => opts.target_amount = value(&mut iter, flag)?,
            "-np" | "--no_plot" => opts.show_plot = false,
            "--config" => {
                let _path: String = value(&mut iter, flag)?;
            }
            "--chart-out" => runner.chart_out = value(&mut iter, flag)?,
            "--json" => runner.json = true,
            other => bail!("'{other}' is an invalid option"),
        }
    }
    Ok(runner)
}

fn value<'a, T>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = iter
        .next()
        .with_context(|| format!("'{flag}' needs a value"))?;
    raw.parse()
        .map_err(|e| anyhow::anyhow!("'{flag}' got invalid value '{raw}': {e}"))
}
