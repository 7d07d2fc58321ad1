use chrono::NaiveDate;
use clap::Parser;
use clap::Subcommand;
use speechlens::analysis;
use speechlens::analysis::DailySummaryRequest;
use speechlens::analysis::MonthlyReportRequest;
use speechlens::api::server;
use speechlens::config::AppConfig;
use speechlens::database::Database;
use speechlens::database::SpeechStore;
use speechlens::models::SortOrder;
use speechlens::models::SpeechQuery;
use speechlens::Result;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "speechlens")]
#[command(about = "SpeechLens CLI for meeting speech analytics")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides config)
        #[arg(long)]
        port: Option<u16>,
        /// Disable CORS
        #[arg(long)]
        no_cors: bool,
    },
    /// List speeches from the database
    Speeches {
        /// Filter by utterance text substring
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by calendar day (YYYY-MM-DD)
        #[arg(long)]
        day: Option<NaiveDate>,
        /// Filter by user display name substring
        #[arg(short, long)]
        user_name: Option<String>,
        /// Filter by meeting id
        #[arg(short, long)]
        meeting: Option<Uuid>,
    },
    /// Produce per-day summaries
    Daily {
        /// Filter by user display name substring
        #[arg(short, long)]
        user_name: Option<String>,
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },
    /// Produce one user's monthly report
    Report {
        /// User display name substring
        #[arg(short, long)]
        user_name: String,
        #[arg(short, long)]
        year: i32,
        /// Month number, 1-12
        #[arg(short, long)]
        month: u32,
    },
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    if cli.verbose {
        speechlens::logging::init_logging()?;
    } else {
        speechlens::logging::init_logging_with_config(Some(&config))?;
    }

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let enable_cors = !no_cors && config.server.enable_cors;
            server::serve_api(&config, host, port, enable_cors).await?;
        }
        Commands::Speeches {
            search,
            day,
            user_name,
            meeting,
        } => {
            let database = Database::from_config(&config).await?;
            let query = SpeechQuery {
                user_name_contains: user_name,
                content_contains: search,
                meeting_id: meeting,
                from_day: day,
                to_day: day,
                order: SortOrder::Descending,
            };
            let speeches = database.list_speeches(&query).await?;
            print_json(&speeches)?;
        }
        Commands::Daily {
            user_name,
            start_date,
            end_date,
        } => {
            let database = Database::from_config(&config).await?;
            let request = DailySummaryRequest {
                user_name,
                start_date,
                end_date,
            };
            let summaries = analysis::daily_summaries(&database, &request).await?;
            print_json(&summaries)?;
        }
        Commands::Report {
            user_name,
            year,
            month,
        } => {
            let database = Database::from_config(&config).await?;
            let lexicon = config.load_lexicon()?;
            let request = MonthlyReportRequest {
                user_name,
                year,
                month,
            };
            let report = analysis::monthly_report(&database, &lexicon, &request).await?;
            print_json(&report)?;
        }
    }

    Ok(())
}
