use anyhow::{Context, Result};
use missions::config::Config;
use missions::repositories::{MissionFilter, StatusFilter};
use missions::service::MissionService;
use missions::storage::Storage;
use missions::utils::datetime;
use uuid::Uuid;

const USAGE: &str = "Usage: missions [--init-config] [--customer <uuid>] [--from <date>] [--to <date>] [--status <text>]";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--init-config") {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let filter = parse_filter(&args)?;

    let config = Config::load()?;
    missions::logger::init(&config.logging)?;

    let storage = Storage::connect(&config.database).await?;
    let service = MissionService::new(storage);

    let missions = service.list_missions(&filter).await?;
    println!("{}", serde_json::to_string_pretty(&missions)?);

    Ok(())
}

fn parse_filter(args: &[String]) -> Result<MissionFilter> {
    let mut filter = MissionFilter::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .with_context(|| format!("Missing value for {}\n{}", flag, USAGE))
        };

        filter = match flag.as_str() {
            "--customer" => {
                let raw = value()?;
                filter.customer(Uuid::parse_str(raw).with_context(|| format!("Invalid customer id '{}'", raw))?)
            }
            "--from" => {
                let raw = value()?;
                filter.formed_from(datetime::parse_start_bound(raw).with_context(|| format!("Invalid date '{}'", raw))?)
            }
            "--to" => {
                let raw = value()?;
                filter.formed_to(datetime::parse_end_bound(raw).with_context(|| format!("Invalid date '{}'", raw))?)
            }
            "--status" => filter.status(StatusFilter::Contains(value()?.clone())),
            other => anyhow::bail!("Unknown argument '{}'\n{}", other, USAGE),
        };
    }

    Ok(filter)
}
