use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use llm::{CannedLlm, GeminiClient, LlmClient};
use schemas::{Category, Recommend, TravelRequest};
use server::HostOrchestrator;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Trip Planner - multi-agent travel planning
#[derive(Parser)]
#[command(name = "trip-planner")]
#[command(about = "Multi-agent travel planner: flights, stays, and activities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one recommendation agent as an A2A HTTP service
    Serve {
        /// Which agent to serve
        #[arg(long)]
        agent: AgentKind,

        /// Port to listen on (defaults to 8001/8002/8003 per agent)
        #[arg(long)]
        port: Option<u16>,

        /// Use the canned offline LLM instead of Gemini
        #[arg(long)]
        simulate: bool,
    },

    /// Run the host orchestrator as an HTTP service over remote agents
    Host {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        #[arg(long, default_value = "http://localhost:8001/run")]
        flight_url: String,

        #[arg(long, default_value = "http://localhost:8002/run")]
        stay_url: String,

        #[arg(long, default_value = "http://localhost:8003/run")]
        activities_url: String,

        /// Per-agent call timeout in seconds
        #[arg(long, default_value = "60")]
        timeout_secs: u64,
    },

    /// Plan a trip end-to-end in a single process
    Plan {
        #[arg(long, default_value = "New York")]
        origin: String,

        #[arg(long)]
        destination: String,

        /// ISO-8601 date, e.g. 2025-06-01
        #[arg(long)]
        start_date: String,

        /// ISO-8601 date, e.g. 2025-06-07
        #[arg(long)]
        end_date: String,

        #[arg(long)]
        budget: f64,

        /// Use the canned offline LLM instead of Gemini
        #[arg(long)]
        simulate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AgentKind {
    Flight,
    Stay,
    Activities,
}

impl AgentKind {
    fn category(self) -> Category {
        match self {
            AgentKind::Flight => Category::Flight,
            AgentKind::Stay => Category::Stay,
            AgentKind::Activities => Category::Activities,
        }
    }

    fn default_port(self) -> u16 {
        match self {
            AgentKind::Flight => 8001,
            AgentKind::Stay => 8002,
            AgentKind::Activities => 8003,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            agent,
            port,
            simulate,
        } => serve_agent(agent, port.unwrap_or_else(|| agent.default_port()), simulate).await,
        Commands::Host {
            port,
            flight_url,
            stay_url,
            activities_url,
            timeout_secs,
        } => {
            serve_host(
                port,
                &flight_url,
                &stay_url,
                &activities_url,
                Duration::from_secs(timeout_secs),
            )
            .await
        }
        Commands::Plan {
            origin,
            destination,
            start_date,
            end_date,
            budget,
            simulate,
        } => {
            let request = TravelRequest {
                origin,
                destination,
                start_date,
                end_date,
                budget,
            };
            plan_trip(request, simulate).await
        }
    }
}

/// Build the LLM client an agent will call through.
fn build_llm(category: Category, simulate: bool) -> Result<Arc<dyn LlmClient>> {
    if simulate {
        return Ok(Arc::new(CannedLlm::for_category(category)));
    }

    let api_key = std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY not set (use --simulate to run without one)")?;
    Ok(Arc::new(GeminiClient::new(api_key)))
}

/// Build one recommendation agent.
fn build_agent(category: Category, simulate: bool) -> Result<Arc<dyn Recommend>> {
    let llm = build_llm(category, simulate)?;
    Ok(match category {
        Category::Flight => Arc::new(agents::FlightAgent::new(llm)),
        Category::Stay => Arc::new(agents::StayAgent::new(llm)),
        Category::Activities => Arc::new(agents::ActivityAgent::new(llm)),
    })
}

/// Run one agent behind the standard A2A surface.
async fn serve_agent(kind: AgentKind, port: u16, simulate: bool) -> Result<()> {
    let agent = build_agent(kind.category(), simulate)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    println!(
        "Starting {} agent on port {}{}",
        kind.category(),
        port,
        if simulate { " (simulated LLM)" } else { "" }
    );
    a2a::serve(listener, agent).await
}

/// Run the host orchestrator as an HTTP service.
async fn serve_host(
    port: u16,
    flight_url: &str,
    stay_url: &str,
    activities_url: &str,
    timeout: Duration,
) -> Result<()> {
    // One connection pool shared across all three remote agents
    let http = reqwest_client();
    let remote = |category: Category, url: &str| -> Arc<dyn Recommend> {
        Arc::new(a2a::RemoteAgent::new(
            category,
            a2a::AgentEndpoint::with_client(http.clone(), url).with_timeout(timeout),
        ))
    };

    let orchestrator = Arc::new(
        HostOrchestrator::new(vec![
            remote(Category::Flight, flight_url),
            remote(Category::Stay, stay_url),
            remote(Category::Activities, activities_url),
        ])
        .with_call_timeout(timeout),
    );

    let app = Router::new()
        .route("/run", post(run_host))
        .route("/health", get(health))
        .with_state(orchestrator);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    println!("Starting Host Agent on port {port}...");
    axum::serve(listener, app).await?;
    Ok(())
}

fn reqwest_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Standard A2A protocol endpoint for the host.
async fn run_host(
    State(orchestrator): State<Arc<HostOrchestrator>>,
    Json(request): Json<TravelRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": e.to_string() })),
        );
    }

    let plan = orchestrator.plan(&request).await;
    (
        StatusCode::OK,
        Json(serde_json::to_value(plan).unwrap_or_default()),
    )
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Plan a trip with in-process agents and pretty-print the envelope.
async fn plan_trip(request: TravelRequest, simulate: bool) -> Result<()> {
    request.validate()?;

    let orchestrator = HostOrchestrator::new(vec![
        build_agent(Category::Flight, simulate)?,
        build_agent(Category::Stay, simulate)?,
        build_agent(Category::Activities, simulate)?,
    ]);

    println!(
        "Planning a trip from {} to {} ({} to {}, budget ${})...",
        request.origin.bold(),
        request.destination.bold(),
        request.start_date,
        request.end_date,
        request.budget
    );

    let start = Instant::now();
    let plan = orchestrator.plan(&request).await;
    println!("Done in {:.2?}\n", start.elapsed());

    print_slot("Flights", &plan.flights);
    print_slot("Stay", &plan.stay);
    print_slot("Activities", &plan.activities);

    if let Some(errors) = &plan.errors {
        println!("{}", "Agent errors:".red().bold());
        for error in errors {
            println!("  - {}", error.red());
        }
    }
    if let Some(error) = &plan.error {
        println!("{} {}", "Orchestration error:".red().bold(), error.red());
    }

    Ok(())
}

fn print_slot(title: &str, value: &serde_json::Value) {
    println!("{}", title.cyan().bold());
    match value {
        serde_json::Value::String(text) => println!("  {text}\n"),
        other => println!(
            "{}\n",
            serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())
        ),
    }
}
