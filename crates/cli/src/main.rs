use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geofence::api::{GateCfg, JsonFileStore, DEFAULT_MAX_ACCURACY_M};
use geofence::service::AttendanceService;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "attendance")]
#[command(about = "Classroom geofence setup and attendance checks", version)]
struct Cmd {
    /// Boundary store (JSON document); created on first `setup`
    #[arg(long, env = "GEOFENCE_STORE", default_value = "classrooms.json")]
    store: PathBuf,

    /// Maximum accepted GPS accuracy radius in meters
    #[arg(long, env = "GEOFENCE_MAX_ACCURACY", default_value_t = DEFAULT_MAX_ACCURACY_M)]
    max_accuracy: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Create a classroom boundary (the built-in test square unless --polygon is given)
    Setup {
        #[arg(long)]
        name: Option<String>,
        /// GeoJSON Polygon geometry file
        #[arg(long)]
        polygon: Option<PathBuf>,
    },
    /// Check whether a reported position counts as present
    Check {
        /// JSON request body (`-` for stdin); flags below override its fields
        #[arg(long)]
        request: Option<PathBuf>,
        #[arg(long)]
        classroom_id: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        accuracy: Option<f64>,
    },
    /// List stored classrooms
    List,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let gate = GateCfg::new(cmd.max_accuracy).context("--max-accuracy")?;
    tracing::debug!(store = %cmd.store.display(), max_accuracy_m = gate.max_accuracy_m, "config");
    let service = AttendanceService::new(JsonFileStore::new(&cmd.store), gate);

    let out = match cmd.action {
        Action::Setup { name, polygon } => commands::setup(&service, name, polygon.as_deref())?,
        Action::Check {
            request,
            classroom_id,
            latitude,
            longitude,
            accuracy,
        } => {
            let mut req = match request {
                Some(path) => commands::read_request(&path)?,
                None => Default::default(),
            };
            req.classroom_id = classroom_id.or(req.classroom_id);
            req.latitude = latitude.or(req.latitude);
            req.longitude = longitude.or(req.longitude);
            req.accuracy = accuracy.or(req.accuracy);
            commands::check(&service, req)?
        }
        Action::List => commands::list(&service)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
