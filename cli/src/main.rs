mod http;

use std::process::ExitCode;
use std::time::Duration;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use vehicles::{BodyType, CarStatus, DraftField, VehicleForm};

use crate::http::HttpClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error(transparent)]
    Submit(#[from] vehicles::SubmitError),
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "carlogix", about = "CarLogix vehicles API CLI")]
struct Cli {
    #[arg(long, env = "CARLOGIX_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Whole-request timeout; unset means no timeout.
    #[arg(long, env = "CARLOGIX_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers.
    Ping,
    /// Submit a new car, the same way the web form does.
    AddCar(AddCarArgs),
    /// List every stored vehicle.
    List,
    /// Show one vehicle.
    Get { vehicle_id: String },
    /// Merge a JSON object of field updates into one vehicle.
    Update {
        vehicle_id: String,
        /// JSON object, e.g. '{"status": "no_keys"}'.
        #[arg(long)]
        data: String,
    },
    /// Delete one vehicle.
    Delete { vehicle_id: String },
}

#[derive(Args, Debug)]
struct AddCarArgs {
    #[arg(long)]
    vin: String,
    #[arg(long)]
    make: String,
    #[arg(long)]
    model: String,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    length: Option<String>,
    #[arg(long)]
    width: Option<String>,
    #[arg(long)]
    height: Option<String>,
    #[arg(long)]
    wheelbase: Option<String>,
    #[arg(long, value_parser = PossibleValuesParser::new(BodyType::ALL.map(BodyType::as_str)))]
    body_type: Option<String>,
    #[arg(long, value_parser = PossibleValuesParser::new(CarStatus::ALL.map(CarStatus::as_str)))]
    status: Option<String>,
}

impl AddCarArgs {
    /// Build a form exactly as if each value had been typed into the page.
    fn into_form(self) -> VehicleForm {
        let mut form = VehicleForm::new();
        let values = [
            (DraftField::Vin, Some(self.vin)),
            (DraftField::Make, Some(self.make)),
            (DraftField::Model, Some(self.model)),
            (DraftField::Year, self.year),
            (DraftField::Length, self.length),
            (DraftField::Width, self.width),
            (DraftField::Height, self.height),
            (DraftField::Wheelbase, self.wheelbase),
            (DraftField::BodyType, self.body_type),
            (DraftField::Status, self.status),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }
        form
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = HttpClient::new(&cli.base_url, cli.timeout_secs.map(Duration::from_secs))?;

    match cli.command {
        Command::Ping => run_ping(&client).await,
        Command::AddCar(args) => run_add_car(&client, args).await,
        Command::List => {
            let records = client.list_vehicles().await?;
            print_json(&serde_json::to_value(&records)?)
        }
        Command::Get { vehicle_id } => {
            let record = client.get_vehicle(&vehicle_id).await?;
            print_json(&serde_json::to_value(&record)?)
        }
        Command::Update { vehicle_id, data } => {
            let record = client.update_vehicle(&vehicle_id, parse_updates(&data)?).await?;
            print_json(&serde_json::to_value(&record)?)
        }
        Command::Delete { vehicle_id } => {
            let json = client.delete_vehicle(&vehicle_id).await?;
            print_json(&json)
        }
    }
}

fn error_line(e: &CliError) -> String {
    format!("error: {e}")
}

/// Parse the `--data` argument of `update`; anything but a JSON object fails.
fn parse_updates(raw: &str) -> Result<Map<String, Value>, CliError> {
    Ok(serde_json::from_str(raw)?)
}

async fn run_ping(client: &HttpClient) -> Result<(), CliError> {
    client.ping().await?;
    println!("ok");
    Ok(())
}

async fn run_add_car(client: &HttpClient, args: AddCarArgs) -> Result<(), CliError> {
    let mut form = args.into_form();
    let result = vehicles::submit::submit(&mut form, client).await;
    let message = form.message();
    if message.is_visible() {
        match &result {
            Ok(()) => println!("{}", message.text),
            Err(_) => eprintln!("{}", message.text),
        }
    }
    result.map_err(CliError::from)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
