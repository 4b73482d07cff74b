// src/main.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use hellio_client::api::PositionUpdate;
use hellio_client::display::{format_month_year, years_of_experience};
use hellio_client::types::model::{Candidate, Position, PositionStatus};
use hellio_client::{ApiClient, ApiConfig, AuthService, DataStore, LoginCredentials, Lookup};

use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hellio")]
#[command(about = "Data-access CLI for the Hellio recruiting dashboard API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the token pair
    Login { username: String, password: String },
    /// Clear the stored token pair
    Logout,
    /// Show the profile behind the stored token
    Whoami,
    /// List or search active candidates
    Candidates {
        #[arg(long)]
        query: Option<String>,
        /// Restrict to candidates who applied to this position
        #[arg(long)]
        position: Option<String>,
    },
    /// Show one candidate in full
    Candidate { id: String },
    /// List open positions
    Positions,
    /// Show one position in full
    Position { id: String },
    /// Link a candidate to a position
    Assign {
        candidate_id: String,
        position_id: String,
    },
    /// Unlink a candidate from a position
    Unassign {
        candidate_id: String,
        position_id: String,
    },
    /// Update fields of a position
    UpdatePosition {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        requirements: Option<String>,
        #[arg(long)]
        min_years: Option<u32>,
        /// Open, Closed, or "On Hold"
        #[arg(long)]
        status: Option<PositionStatus>,
        #[arg(long)]
        posted_date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::load()?;
    let client = Arc::new(ApiClient::new(&config)?);
    let auth = AuthService::new(client.clone());
    let store = DataStore::new(client);

    // CI and demo setups can export HELLIO_USERNAME/HELLIO_PASSWORD instead
    // of running `hellio login` first.
    if !matches!(cli.command, Command::Login { .. } | Command::Logout) {
        if let (Ok(username), Ok(password)) = (
            std::env::var("HELLIO_USERNAME"),
            std::env::var("HELLIO_PASSWORD"),
        ) {
            auth.ensure_authenticated(&LoginCredentials { username, password })
                .await;
        }
    }

    match cli.command {
        Command::Login { username, password } => {
            auth.login(&LoginCredentials { username, password }).await?;
            println!("Logged in");
        }
        Command::Logout => {
            auth.logout();
            println!("Logged out");
        }
        Command::Whoami => {
            let user = auth.current_user().await?;
            println!("{} <{}> ({})", user.full_name, user.email, user.role);
        }
        Command::Candidates { query, position } => {
            let candidates = store
                .search_candidates(query.as_deref().unwrap_or(""), position.as_deref())
                .await?;
            for candidate in &candidates {
                print_candidate_row(candidate);
            }
            println!("{} candidate(s)", candidates.len());
        }
        Command::Candidate { id } => match store.get_candidate(&id).await {
            Lookup::Found(candidate) => print_candidate_detail(&candidate),
            Lookup::NotFound => println!("No candidate with id {id}"),
            Lookup::Failed(e) => anyhow::bail!("Lookup failed: {e}"),
        },
        Command::Positions => {
            let positions = store.fetch_positions().await?;
            for position in &positions {
                print_position_row(position);
            }
            println!("{} position(s)", positions.len());
        }
        Command::Position { id } => match store.get_position(&id).await {
            Lookup::Found(position) => print_position_detail(&position),
            Lookup::NotFound => println!("No position with id {id}"),
            Lookup::Failed(e) => anyhow::bail!("Lookup failed: {e}"),
        },
        Command::Assign {
            candidate_id,
            position_id,
        } => {
            let message = store.assign_position(&candidate_id, &position_id).await?;
            store.clear_cache().await;
            println!("{message}");
        }
        Command::Unassign {
            candidate_id,
            position_id,
        } => {
            let message = store.unassign_position(&candidate_id, &position_id).await?;
            store.clear_cache().await;
            println!("{message}");
        }
        Command::UpdatePosition {
            id,
            title,
            department,
            location,
            description,
            requirements,
            min_years,
            status,
            posted_date,
        } => {
            let update = PositionUpdate {
                title,
                department,
                location,
                description,
                requirements,
                min_experience_years: min_years,
                status,
                posted_date,
            };
            let position = store.update_position(&id, &update).await?;
            store.clear_cache().await;
            print_position_detail(&position);
        }
    }

    Ok(())
}

fn print_candidate_row(candidate: &Candidate) {
    let skills = candidate
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "{}  {}  <{}>  {}  [{}]",
        candidate.id,
        candidate.full_name(),
        candidate.email,
        candidate.status,
        skills
    );
}

fn print_candidate_detail(candidate: &Candidate) {
    println!("{} ({})", candidate.full_name(), candidate.status);
    println!("  email: {}", candidate.email);
    println!("  phone: {}", candidate.phone);
    println!("  experience: {} year(s)", years_of_experience(candidate));
    for job in &candidate.experience {
        println!(
            "    {} at {} ({} - {})",
            job.title,
            job.company,
            format_month_year(Some(&job.start_date)),
            format_month_year(job.end_date.as_deref())
        );
    }
    for edu in &candidate.education {
        println!(
            "    {} in {}, {} ({})",
            edu.degree,
            edu.field,
            edu.institution,
            format_month_year(edu.graduation_date.as_deref())
        );
    }
    if !candidate.skills.is_empty() {
        let skills = candidate
            .skills
            .iter()
            .map(|s| format!("{} ({})", s.name, s.level))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  skills: {skills}");
    }
    for doc in &candidate.documents {
        println!("  document: {} ({})", doc.filename, doc.path);
    }
    if !candidate.applied_positions.is_empty() {
        println!("  applied to: {}", candidate.applied_positions.join(", "));
    }
}

fn print_position_row(position: &Position) {
    println!(
        "{}  {}  {}  {}",
        position.id, position.title, position.department, position.status
    );
}

fn print_position_detail(position: &Position) {
    println!("{} - {} ({})", position.title, position.department, position.status);
    println!("  {}", position.description);
    println!("  experience: {}", position.requirements.experience);
    if !position.requirements.skills.is_empty() {
        println!("  skills: {}", position.requirements.skills.join(", "));
    }
    if !position.candidates.is_empty() {
        println!("  candidates: {}", position.candidates.join(", "));
    }
}
