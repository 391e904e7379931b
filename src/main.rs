use clap::{Parser, Subcommand};
use proxima_client::{
    Address, ClientConfig, Features, GrpcTransport, ListFilter, ProximaClient, QueryOptions,
};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Command line client for Proxima BE
#[derive(Parser, Debug)]
#[command(name = "proxima-client")]
#[command(about = "Talk to a Proxima BE server", long_about = None)]
struct Args {
    /// Server host
    #[arg(long, default_value = proxima_core::config::DEFAULT_HOST)]
    host: String,

    /// Server gRPC port
    #[arg(long, default_value_t = proxima_core::config::DEFAULT_PORT)]
    port: u16,

    /// Per call timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print client and server versions
    Version,
    /// List collections
    List {
        /// Only collections fed by this repository
        #[arg(long)]
        repo: Option<String>,
    },
    /// Describe a collection
    Describe { collection: String },
    /// Print collection statistics
    Stats { collection: String },
    /// Drop a collection
    Drop { collection: String },
    /// Fetch a document by primary key
    Get { collection: String, key: u64 },
    /// Knn query with a float32 vector
    Query {
        collection: String,
        column: String,
        /// Comma separated components
        #[arg(long, value_delimiter = ',', required = true)]
        vector: Vec<f32>,
        #[arg(long, default_value_t = proxima_core::DEFAULT_TOPK)]
        topk: u32,
        #[arg(long)]
        radius: Option<f32>,
        /// Brute force instead of the index
        #[arg(long)]
        linear: bool,
        #[arg(long)]
        debug: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig {
        address: Address {
            host: args.host,
            port: args.port,
        },
        timeout: Duration::from_secs(args.timeout_secs),
    };
    info!("Connecting to {}", config.address);

    let transport = GrpcTransport::connect(&config).await?;
    let client = ProximaClient::connect(transport).await?;

    match args.command {
        Command::Version => print_json(client.version())?,
        Command::List { repo } => {
            let filters: Vec<ListFilter> = repo.into_iter().map(ListFilter::ByRepo).collect();
            print_json(&client.list_collections(&filters).await?)?;
        }
        Command::Describe { collection } => {
            print_json(&client.describe_collection(&collection).await?)?
        }
        Command::Stats { collection } => print_json(&client.stat_collection(&collection).await?)?,
        Command::Drop { collection } => {
            client.drop_collection(&collection).await?;
            info!("Dropped collection {}", collection);
        }
        Command::Get { collection, key } => {
            print_json(&client.get_document_by_key(&collection, key).await?)?
        }
        Command::Query {
            collection,
            column,
            vector,
            topk,
            radius,
            linear,
            debug,
        } => {
            let mut builder = QueryOptions::builder().topk(topk);
            if let Some(radius) = radius {
                builder = builder.radius(radius);
            }
            if linear {
                builder = builder.linear_search();
            }
            if debug {
                builder = builder.debug_mode();
            }
            let options = builder.build()?;
            let features = Features::from(vector);
            print_json(&client.query(&collection, &column, &features, &options).await?)?;
        }
    }

    Ok(())
}
