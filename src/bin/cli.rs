//! Genealina CLI
//!
//! Command-line access to the contact inbox:
//! - List and read submissions
//! - Delete a submission
//! - Send a submission through the contact form rules
//! - Check the backend and the resolved origin

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use genealina::config::{generate_default_config, Config};
use genealina::dashboard::render;
use genealina::site::{ContactForm, FormField};
use genealina::{
    logging, ContactMessage, ContactsApi, ContactsClient, Dashboard, DeleteOutcome,
};

#[derive(Parser)]
#[command(name = "genealina")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage contact submissions of the Genealina Labs site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend origin, skipping hostname resolution
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Page hostname to resolve the backend for
    #[arg(long, global = true)]
    pub hostname: Option<String>,

    /// Page port to resolve the backend for
    #[arg(long, global = true)]
    pub port: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List submissions
    List,

    /// Show one submission
    Show {
        /// Submission identifier
        id: String,
    },

    /// Delete a submission
    Delete {
        /// Submission identifier
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Send a submission
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },

    /// Check that the backend answers
    Health,

    /// Print the backend origin requests go to
    Origin,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path),
        None => Config::load_default(),
    }
    .context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.client.api_url = Some(url.clone());
    }
    if let Some(hostname) = &cli.hostname {
        config.client.hostname = hostname.clone();
    }
    if let Some(port) = &cli.port {
        config.client.port = port.clone();
    }
    logging::init(&config.logging);

    let client =
        ContactsClient::new(config.client_config()).context("Failed to build HTTP client")?;
    let dashboard = Dashboard::new(client);

    match cli.command {
        Commands::List => {
            load(&dashboard).await?;
            let state = dashboard.state();
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(state.messages())?),
                Format::Table => print_table(state.messages()),
            }
        }

        Commands::Show { id } => {
            load(&dashboard).await?;
            if !dashboard.open_detail(&id) {
                bail!("No submission with id {}", id);
            }
            let state = dashboard.state();
            if let Some(message) = state.current() {
                match cli.format {
                    Format::Json => println!("{}", serde_json::to_string_pretty(message)?),
                    Format::Table => print_detail(message),
                }
            }
        }

        Commands::Delete { id, yes } => {
            load(&dashboard).await?;
            if !dashboard.open_detail(&id) {
                bail!("No submission with id {}", id);
            }

            let outcome = dashboard
                .delete_current(|message| yes || confirm(message))
                .await;

            match outcome {
                DeleteOutcome::Deleted => {
                    println!("Deleted {}", id);
                    println!("{} submissions left", dashboard.state().count());
                }
                DeleteOutcome::Cancelled | DeleteOutcome::NothingOpen => {
                    println!("Nothing deleted")
                }
                DeleteOutcome::Failed(e) => {
                    let alert = dashboard.take_alert().unwrap_or_default();
                    bail!("{} ({})", alert, e);
                }
            }
        }

        Commands::Create {
            name,
            lastname,
            email,
            phone,
            message,
        } => {
            let mut form = ContactForm::new();
            form.set(FormField::Name, name);
            form.set(FormField::Lastname, lastname);
            form.set(FormField::Email, email);
            form.set(FormField::Phone, phone);
            form.set(FormField::Message, message);

            if !form.validate() {
                for field in FormField::ALL {
                    if let Some(error) = form.error(field) {
                        eprintln!("--{}: {}", field.name(), error);
                    }
                }
                bail!("Submission not sent");
            }

            let created = dashboard.api().create(&form.input()).await?;
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&created)?),
                Format::Table => println!("Created {} ({})", created.id, created.full_name()),
            }
        }

        Commands::Health => {
            let origin = dashboard.api().origin();
            if dashboard.api().health().await {
                println!("Backend at {} is up", origin);
            } else {
                eprintln!("Cannot reach the backend at {}", origin);
                eprintln!();
                eprintln!("For local development start it with:");
                eprintln!("  cargo run --bin genealina-api");
                std::process::exit(1);
            }
        }

        Commands::Origin => println!("{}", dashboard.api().origin()),

        Commands::Config { output } => write_config(output.as_ref())?,
    }

    Ok(())
}

/// Load the list, failing when the dashboard ends up in its error state
async fn load(dashboard: &Dashboard<ContactsClient>) -> anyhow::Result<()> {
    dashboard.refresh().await;
    if let Some(message) = dashboard.state().error_message() {
        bail!("{} ({})", message, dashboard.api().origin());
    }
    Ok(())
}

fn confirm(message: &ContactMessage) -> bool {
    print!(
        "Delete the message from {} <{}>? [y/N] ",
        message.full_name(),
        message.email
    );
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

fn print_table(messages: &[ContactMessage]) {
    if messages.is_empty() {
        println!("No messages yet.");
        return;
    }

    println!(
        "{:<26} {:<20} {:<24} {:<19} {}",
        "ID", "Name", "Email", "Date", "Message"
    );
    println!("{}", "-".repeat(110));

    for message in messages {
        let first_line = message.message.lines().next().unwrap_or_default();
        println!(
            "{:<26} {:<20} {:<24} {:<19} {}",
            message.id,
            truncate(&message.full_name(), 20),
            truncate(&message.email, 24),
            render::format_date(message.created_at.as_deref()),
            truncate(first_line, 40)
        );
    }

    println!();
    println!("{} messages", messages.len());
}

fn print_detail(message: &ContactMessage) {
    println!("{}", message.full_name());
    println!("{}", "-".repeat(40));
    println!("Email: {}", message.email);
    println!("Phone: {}", render::phone(message));
    println!("Date:  {}", render::format_date(message.created_at.as_deref()));
    println!();
    println!("{}", message.message);
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", head)
}
