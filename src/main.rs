use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scp_client::RecordService;
use scp_core::config::{api_base_url_from_env_value, credentials_from_env_values};
use scp_core::dates::{to_display_date_time, to_wire_date, to_wire_date_time};
use scp_core::listing::summarize;
use scp_core::mask::{check_length, mask_field};
use scp_core::validation::validate_all;
use scp_core::{CoreConfig, FieldKind, FormState, LoginForm, RecordKind};

#[derive(Parser)]
#[command(name = "scp")]
#[command(about = "SCP clinical registration front-end")]
struct Cli {
    /// Login email (required for create/list)
    #[arg(long, global = true)]
    email: Option<String>,
    /// Login password (required for create/list)
    #[arg(long, global = true)]
    password: Option<String>,
    /// Print records as JSON instead of summaries
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mask a raw value the way the form input does
    Mask {
        kind: MaskKind,
        raw: String,
        /// Fail instead of truncating over-long digit input
        #[arg(long)]
        strict: bool,
    },
    /// Convert a date between display and wire formats
    Convert { conversion: Conversion, value: String },
    /// Check login credentials
    Login,
    /// Show the fields of a record kind
    Fields { kind: KindArg },
    /// Fill a form and submit it to the record service
    Create {
        kind: KindArg,
        /// Field assignment `name=value`; repeat for list fields
        #[arg(short = 'f', long = "field", value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },
    /// List stored records
    List {
        kind: KindArg,
        /// Case-insensitive search on the kind's search fields
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MaskKind {
    Cpf,
    Phone,
    Sus,
    BirthDate,
    DateTime,
}

impl From<MaskKind> for FieldKind {
    fn from(kind: MaskKind) -> Self {
        match kind {
            MaskKind::Cpf => FieldKind::Identifier,
            MaskKind::Phone => FieldKind::Phone,
            MaskKind::Sus => FieldKind::HealthCard,
            MaskKind::BirthDate => FieldKind::BirthDate,
            MaskKind::DateTime => FieldKind::DateTime,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Conversion {
    /// DD/MM/YYYY -> YYYY-MM-DD
    Date,
    /// DD/MM/YYYY HH:mm -> YYYY-MM-DDTHH:mm:00
    DateTime,
    /// YYYY-MM-DDTHH:mm -> DD/MM/YYYY HH:mm
    Display,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Patient,
    Professional,
    Appointment,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Patient => RecordKind::Patient,
            KindArg::Professional => RecordKind::Professional,
            KindArg::Appointment => RecordKind::Appointment,
        }
    }
}

fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{arg}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{arg}'"));
    }
    Ok((name.to_owned(), value.to_owned()))
}

/// Entry point for the SCP command-line front-end.
///
/// # Environment Variables
/// - `SCP_API_URL`: base URL of the record service (default: the hosted service)
/// - `SCP_LOGIN_EMAIL`, `SCP_LOGIN_PASSWORD`: account accepted by the login gate
/// - `RUST_LOG`: log filter, on top of `scp=info`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("scp=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CoreConfig::new(
        api_base_url_from_env_value(std::env::var("SCP_API_URL").ok())?,
        credentials_from_env_values(
            std::env::var("SCP_LOGIN_EMAIL").ok(),
            std::env::var("SCP_LOGIN_PASSWORD").ok(),
        ),
    )?;

    match cli.command {
        Commands::Mask { kind, raw, strict } => {
            let kind = FieldKind::from(kind);
            if strict {
                check_length(kind, &raw)?;
            }
            println!("{}", mask_field(kind, &raw));
        }
        Commands::Convert { conversion, value } => {
            let converted = match conversion {
                Conversion::Date => to_wire_date(&value)?,
                Conversion::DateTime => to_wire_date_time(&value)?,
                Conversion::Display => to_display_date_time(&value),
            };
            println!("{converted}");
        }
        Commands::Login => {
            login_gate(&config, cli.email, cli.password)?;
            println!("Login OK");
        }
        Commands::Fields { kind } => {
            for spec in RecordKind::from(kind).fields() {
                let marker = if spec.required { " *" } else { "" };
                match spec.kind.options() {
                    Some(options) => println!(
                        "{:<24} {:?} [{}]{}",
                        spec.name,
                        spec.kind,
                        options.join("|"),
                        marker
                    ),
                    None => println!("{:<24} {:?}{}", spec.name, spec.kind, marker),
                }
            }
        }
        Commands::Create { kind, fields } => {
            login_gate(&config, cli.email, cli.password)?;
            let form = fill_form(kind.into(), &fields)?;
            let service = RecordService::new(config)?;
            let created = service.submit(&form).await?;
            tracing::info!("{} created", form.kind());
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Commands::List { kind, search } => {
            login_gate(&config, cli.email, cli.password)?;
            let kind = RecordKind::from(kind);
            let service = RecordService::new(config)?;
            let records = service
                .search(kind, search.as_deref().unwrap_or_default())
                .await?;
            print_records(kind, &records, cli.json)?;
        }
    }

    Ok(())
}

fn login_gate(
    config: &CoreConfig,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let form = LoginForm {
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
    };
    config
        .credentials()
        .check(&form)
        .context("login failed (use --email and --password)")
}

fn fill_form(kind: RecordKind, fields: &[(String, String)]) -> anyhow::Result<FormState> {
    let mut form = FormState::new(kind);
    for (name, value) in fields {
        let is_list = kind
            .field(name)
            .is_some_and(|spec| spec.kind == FieldKind::List);
        if is_list {
            form.add_list_item(name, value)?;
        } else {
            form.set_field(name, value)?;
        }
    }

    let issues = validate_all(kind, form.values());
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{}: {}", issue.field, issue.error);
        }
        bail!("{} form has {} problem(s)", kind, issues.len());
    }
    Ok(form)
}

fn print_records(
    kind: RecordKind,
    records: &[serde_json::Value],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    println!("{} registro(s) encontrado(s)", records.len());
    for record in records {
        let summary = summarize(kind, record);
        match summary.id {
            Some(id) => println!("\n[{id}] {}", summary.title),
            None => println!("\n{}", summary.title),
        }
        for (label, value) in &summary.rows {
            println!("  {label}: {value}");
        }
    }
    Ok(())
}
