//! `onboard`: add one CSV file to an in-memory catalog and print the result.
//!
//! ```text
//! onboard --path /data/x.csv --name "X" --columns a,b --user alice
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use csv_onboard_core::identity::{
    DEFAULT_CONNECTION_GUID, DEFAULT_CONNECTOR_PROVIDER, DEFAULT_CONNECTOR_TYPE_GUID,
    DEFAULT_ENDPOINT_GUID,
};
use csv_onboard_core::{CatalogIdentities, OnboardingRequest};
use csv_onboard_server::{
    telemetry, AbsentRequestPolicy, InMemoryCatalogStore, OnboardingConfig, OnboardingService,
    StoreConfig, TracingAuditLog,
};

#[derive(Debug, Parser)]
#[command(name = "onboard", version, about = "Add a CSV file to the catalog")]
struct Cli {
    /// Full path of the file. Omit to send an empty request.
    #[arg(long)]
    path: Option<String>,

    /// Display name of the asset.
    #[arg(long, default_value = "")]
    name: String,

    /// Description of the asset.
    #[arg(long, default_value = "")]
    description: String,

    /// Comma-separated column headers, in order.
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<String>>,

    /// Field delimiter (default `,`).
    #[arg(long)]
    delimiter: Option<char>,

    /// Quote character (default `"`).
    #[arg(long)]
    quote: Option<char>,

    /// Caller identity.
    #[arg(long, env = "CSV_ONBOARD_USER", default_value = "anonymous")]
    user: String,

    /// Name of this onboarding server.
    #[arg(long, env = "CSV_ONBOARD_SERVER_NAME", default_value = "csv-onboard")]
    server_name: String,

    #[arg(long, env = "CSV_ONBOARD_ENDPOINT_GUID", default_value = DEFAULT_ENDPOINT_GUID)]
    endpoint_guid: String,

    #[arg(long, env = "CSV_ONBOARD_CONNECTOR_TYPE_GUID", default_value = DEFAULT_CONNECTOR_TYPE_GUID)]
    connector_type_guid: String,

    #[arg(long, env = "CSV_ONBOARD_CONNECTION_GUID", default_value = DEFAULT_CONNECTION_GUID)]
    connection_guid: String,

    #[arg(long, env = "CSV_ONBOARD_CONNECTOR_PROVIDER", default_value = DEFAULT_CONNECTOR_PROVIDER)]
    connector_provider: String,

    /// Treat a missing `--path` as invalid input instead of a no-op.
    #[arg(long, env = "CSV_ONBOARD_REJECT_ABSENT")]
    reject_absent: bool,

    /// Comma-separated users allowed to create assets. Unset allows everyone.
    #[arg(long, env = "CSV_ONBOARD_AUTHORIZED_USERS", value_delimiter = ',')]
    authorized_users: Option<Vec<String>>,

    /// Emit logs as JSON.
    #[arg(long, env = "CSV_ONBOARD_JSON_LOGS")]
    json_logs: bool,

    /// Also print the stored descriptor graph.
    #[arg(long)]
    show_graph: bool,
}

impl Cli {
    fn onboarding_config(&self) -> OnboardingConfig {
        OnboardingConfig {
            server_name: self.server_name.clone(),
            identities: CatalogIdentities {
                endpoint_guid: self.endpoint_guid.clone(),
                connector_type_guid: self.connector_type_guid.clone(),
                connection_guid: self.connection_guid.clone(),
                connector_provider: self.connector_provider.clone(),
            },
            absent_request: if self.reject_absent {
                AbsentRequestPolicy::Reject
            } else {
                AbsentRequestPolicy::NoOp
            },
        }
    }

    fn request(&self) -> Option<OnboardingRequest> {
        self.path.as_ref().map(|path| OnboardingRequest {
            full_path: path.clone(),
            display_name: self.name.clone(),
            description: self.description.clone(),
            column_headers: self.columns.clone(),
            delimiter: self.delimiter,
            quote: self.quote,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init(cli.json_logs)?;

    let store = Arc::new(InMemoryCatalogStore::with_config(StoreConfig {
        enforce_unique_names: false,
        authorized_users: cli.authorized_users.clone(),
    }));
    let service = OnboardingService::new(cli.onboarding_config(), store.clone())
        .with_audit_log(Arc::new(TracingAuditLog));

    let result = service.onboard(&cli.user, cli.request()).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if cli.show_graph {
        if let Some(stored) = result.guid().and_then(|guid| store.get(guid)) {
            println!("{}", serde_json::to_string_pretty(&stored.graph)?);
        }
    }

    Ok(if result.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
