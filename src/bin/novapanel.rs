use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use novapanel::geometry::{self, Viewport};
use novapanel::models::Series;
use novapanel::notify::{LogSink, NotificationSink, Severity};
use novapanel::{credit, currency, samples, stats, storage, validate};

#[derive(Parser, Debug)]
#[command(
    name = "novapanel",
    version,
    about = "Inspect and exercise the Novacapital dashboard core"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a series into chart geometry and print it as JSON.
    Chart(ChartArgs),
    /// Check document numbers, emails, phones, or passwords.
    Validate(ValidateArgs),
    /// Format an amount as whole Colombian pesos.
    Format(FormatArgs),
    /// Print summary statistics for a series.
    Summary(SeriesArgs),
    /// Estimate the monthly installment of a loan.
    Simulate(SimulateArgs),
    /// Export a series to CSV or JSON.
    Export(ExportArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SampleName {
    /// Monthly active clients.
    Clients,
    /// Weekly disbursed credits.
    Credits,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChartKind {
    Bar,
    Line,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct SeriesArgs {
    /// Built-in sample series to use when --values is not given.
    #[arg(long, value_enum, default_value = "credits")]
    sample: SampleName,
    /// Comma- or semicolon-separated values (labels become 1-based indices).
    #[arg(long)]
    values: Option<String>,
}

#[derive(Args, Debug)]
struct ChartArgs {
    #[command(flatten)]
    series: SeriesArgs,
    /// Chart kind to project the series into.
    #[arg(long, value_enum, default_value = "line")]
    kind: ChartKind,
    /// Viewport width for line charts.
    #[arg(long, default_value_t = 700.0)]
    width: f64,
    /// Viewport height for line charts.
    #[arg(long, default_value_t = 200.0)]
    height: f64,
    /// Headroom kept above the tallest point for the callout.
    #[arg(long, default_value_t = 20.0)]
    margin: f64,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Document check as TYPE:NUMBER (e.g. CC:1032456789).
    #[arg(long)]
    document: Option<String>,
    /// Email address to check.
    #[arg(long)]
    email: Option<String>,
    /// Mobile phone number to check (spaces allowed).
    #[arg(long)]
    phone: Option<String>,
    /// Password to check against the registration policy.
    #[arg(long)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Amount in pesos; may be negative or fractional.
    #[arg(long, allow_hyphen_values = true)]
    amount: f64,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Requested amount in pesos.
    #[arg(long)]
    principal: f64,
    /// Term in months.
    #[arg(long)]
    months: u32,
    /// Monthly interest rate in percent.
    #[arg(long, default_value_t = credit::DEFAULT_MONTHLY_RATE_PCT)]
    rate: f64,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    series: SeriesArgs,
    /// Destination file; format inferred from the extension unless --format
    /// is given.
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json).
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn parse_values(s: &str) -> Result<Vec<f64>> {
    s.split([',', ';'])
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(|x| {
            x.parse::<f64>()
                .map_err(|e| anyhow::anyhow!("invalid value {x:?}: {e}"))
        })
        .collect()
}

fn resolve_series(args: &SeriesArgs) -> Result<Series> {
    if let Some(raw) = args.values.as_deref() {
        let values = parse_values(raw)?;
        let labels = (1..=values.len()).map(|i| i.to_string()).collect();
        return Ok(Series::new(values, labels)?);
    }
    Ok(match args.sample {
        SampleName::Clients => samples::active_clients(),
        SampleName::Credits => samples::disbursed_credits(),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Chart(args) => cmd_chart(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Format(args) => cmd_format(args),
        Command::Summary(args) => cmd_summary(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn cmd_chart(args: ChartArgs) -> Result<()> {
    let series = resolve_series(&args.series)?;
    let json = match args.kind {
        ChartKind::Bar => serde_json::to_string_pretty(&geometry::compute_bar_geometry(&series))?,
        ChartKind::Line => {
            let viewport = Viewport {
                width: args.width,
                height: args.height,
                top_margin: args.margin,
            };
            serde_json::to_string_pretty(&geometry::compute_line_geometry(&series, &viewport)?)?
        }
    };
    println!("{json}");
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let mut checked = 0usize;
    let mut failed = 0usize;
    let mut report = |what: &str, ok: bool| {
        checked += 1;
        if ok {
            println!("{what}: ok");
        } else {
            failed += 1;
            println!("{what}: INVALID");
        }
    };

    if let Some(doc) = args.document.as_deref() {
        let (kind, number) = doc
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("expected TYPE:NUMBER, got {doc:?}"))?;
        report("document", validate::validate_document(kind, number));
    }
    if let Some(email) = args.email.as_deref() {
        report("email", validate::validate_email(email));
    }
    if let Some(phone) = args.phone.as_deref() {
        report("phone", validate::validate_phone(phone));
    }
    if let Some(password) = args.password.as_deref() {
        report("password", validate::validate_password(password));
    }

    if checked == 0 {
        bail!("nothing to validate; pass --document, --email, --phone, or --password");
    }
    if failed > 0 {
        bail!("{failed} of {checked} checks failed");
    }
    Ok(())
}

fn cmd_format(args: FormatArgs) -> Result<()> {
    println!("{}", currency::format_currency(args.amount));
    Ok(())
}

fn cmd_summary(args: SeriesArgs) -> Result<()> {
    let series = resolve_series(&args)?;
    let summary = stats::series_summary(&series);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let values = series.values();
    if values.len() >= 2
        && let Some(trend) = stats::trend_pct(values[values.len() - 2], values[values.len() - 1])
    {
        println!("trend: {trend:+.1}%");
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> Result<()> {
    let installment = credit::monthly_installment(args.principal, args.rate, args.months);
    let total = installment * args.months as f64;
    println!(
        "monthly installment: {}",
        currency::format_currency(installment)
    );
    println!("total repaid: {}", currency::format_currency(total));
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let series = resolve_series(&args.series)?;
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => args
            .out
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv"),
    }
    .to_ascii_lowercase();

    match fmt.as_str() {
        "csv" => storage::save_csv(&series, &args.out)?,
        "json" => storage::save_json(&series, &args.out)?,
        other => bail!("unsupported format {other:?} (expected csv or json)"),
    }

    LogSink.notify(
        &format!("report saved to {}", args.out.display()),
        Severity::Info,
    );
    Ok(())
}
