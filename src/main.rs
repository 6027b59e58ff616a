//! NutriVibe CLI
//!
//! Command-line front end for the clinic backend:
//! - Book appointments
//! - Read and send chat messages
//! - Save prescriptions and invoices
//! - Submit the intake questionnaire

use clap::{Parser, Subcommand};
use nutrivibe::config::{generate_default_config, LoggingConfig};
use nutrivibe::{
    AppointmentForm, ChatSession, ClinicApi, ClinicClient, Config, Created, InvoiceForm,
    PrescriptionForm, QuestionnaireForm,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nutrivibe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the NutriVibe nutrition clinic")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reserve an appointment
    Book {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Date, e.g. 2026-11-03
        #[arg(long, default_value = "")]
        date: String,
        /// Time, e.g. 09:30
        #[arg(long, default_value = "")]
        time: String,
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Live chat
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },

    /// Create a prescription
    Prescribe {
        #[arg(long, default_value = "")]
        patient_name: String,
        #[arg(long, default_value = "")]
        patient_email: String,
        /// Items (comma separated)
        #[arg(long, default_value = "")]
        items: String,
        #[arg(long, default_value = "")]
        instructions: String,
    },

    /// Generate an invoice
    Invoice {
        #[arg(long, default_value = "")]
        patient_name: String,
        #[arg(long, default_value = "")]
        patient_email: String,
        /// Items (comma separated)
        #[arg(long, default_value = "")]
        items: String,
        #[arg(long, default_value = "0")]
        subtotal: String,
        #[arg(long, default_value = "0")]
        tax: String,
        #[arg(long, default_value = "0")]
        total: String,
    },

    /// Submit the nutrition intake questionnaire
    Questionnaire {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        goals: String,
        #[arg(long, default_value = "")]
        allergies: String,
        #[arg(long, default_value = "")]
        dietary_preferences: String,
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ChatAction {
    /// Show the messages of a room
    List {
        /// Room (default: from config)
        #[arg(long)]
        room: Option<String>,
    },

    /// Send a message, then show the room
    Send {
        /// Message text
        content: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Room (default: from config)
        #[arg(long)]
        room: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    // Logging settings come from the config, so a broken file is reported
    // directly rather than through tracing.
    let loaded = match &cli.config {
        Some(path) => Config::load_with_env(path),
        None => Config::load_default(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(url) = &cli.backend_url {
        config.backend.url = url.clone();
    }

    init_logging(&config.logging);

    let client = ClinicClient::new(config.client_config())?;
    tracing::debug!(backend = %client.config().base_url, "Clinic client ready");

    let result = run(&cli, &config, &client).await;
    if let Err(e) = result {
        eprintln!("Failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    cli: &Cli,
    config: &Config,
    client: &ClinicClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.format == "json";

    match &cli.command {
        Commands::Book {
            name,
            email,
            date,
            time,
            reason,
        } => {
            let form = AppointmentForm {
                name: name.clone(),
                email: email.clone(),
                date: date.clone(),
                time: time.clone(),
                reason: reason.clone(),
            };
            let created = client.create_appointment(&form.into()).await?;
            report(json, "Appointment created", &created)?;
        }

        Commands::Chat { action } => match action {
            ChatAction::List { room } => {
                let room = room.as_deref().unwrap_or(&config.chat.room);
                let mut chat = ChatSession::in_room(client, room, "", "");
                chat.open().await?;
                print_chat(json, &chat)?;
            }
            ChatAction::Send {
                content,
                name,
                email,
                room,
            } => {
                let room = room.as_deref().unwrap_or(&config.chat.room);
                let mut chat = ChatSession::in_room(client, room, name.as_str(), email.as_str());
                if chat.send(content).await?.is_none() {
                    tracing::info!("Empty message, nothing sent");
                    return Ok(());
                }
                print_chat(json, &chat)?;
            }
        },

        Commands::Prescribe {
            patient_name,
            patient_email,
            items,
            instructions,
        } => {
            let form = PrescriptionForm {
                patient_email: patient_email.clone(),
                patient_name: patient_name.clone(),
                items: items.clone(),
                instructions: instructions.clone(),
            };
            let created = client.create_prescription(&form.into()).await?;
            report(json, "Prescription saved", &created)?;
        }

        Commands::Invoice {
            patient_name,
            patient_email,
            items,
            subtotal,
            tax,
            total,
        } => {
            let form = InvoiceForm {
                patient_email: patient_email.clone(),
                patient_name: patient_name.clone(),
                items: items.clone(),
                subtotal: subtotal.clone(),
                tax: tax.clone(),
                total: total.clone(),
            };
            let created = client.create_invoice(&form.into()).await?;
            report(json, "Invoice created", &created)?;
        }

        Commands::Questionnaire {
            email,
            goals,
            allergies,
            dietary_preferences,
            notes,
        } => {
            let form = QuestionnaireForm {
                email: email.clone(),
                goals: goals.clone(),
                allergies: allergies.clone(),
                dietary_preferences: dietary_preferences.clone(),
                notes: notes.clone(),
            };
            let created = client.create_questionnaire(&form.into()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!("Submitted!");
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn report(json: bool, label: &str, created: &Created) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(created)?);
    } else {
        println!("{}: {}", label, created.id_label());
    }
    Ok(())
}

fn print_chat(json: bool, chat: &ChatSession<'_, ClinicClient>) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(chat.messages())?);
    } else {
        for row in chat.rows() {
            println!("{}", row);
        }
    }
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("nutrivibe={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
