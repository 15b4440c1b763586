use clap::Parser;
use lead_quote::core::ConfigProvider;
use lead_quote::utils::logger;
use lead_quote::utils::validation::Validate;
use lead_quote::{submit_best_effort, AppConfig, HttpLeadGateway, ProsApplication, SubmissionOutcome};

#[derive(Parser)]
#[command(name = "pros-apply")]
#[command(about = "Send a cleaner's application to join the network")]
struct Args {
    /// Applicant full name
    #[arg(long)]
    name: String,

    /// Applicant phone number
    #[arg(long)]
    phone: String,

    /// Applicant email
    #[arg(long)]
    email: String,

    /// Cleaning experience, free text
    #[arg(long)]
    experience: Option<String>,

    #[arg(long)]
    notes: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = "lead-quote.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = match AppConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let application = ProsApplication {
        name: args.name,
        phone: args.phone,
        email: args.email,
        experience: args.experience,
        notes: args.notes,
    };
    let application = match application.validated() {
        Ok(application) => application,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let gateway = HttpLeadGateway::new(config.backend_endpoint(), config.request_timeout())?;
    match submit_best_effort(&gateway, &application, config.request_timeout()).await {
        SubmissionOutcome::Accepted { .. } => {
            println!("✅ Application received. We'll review it and contact you soon.");
        }
        other => {
            eprintln!("⚠️  Application was not recorded: {:?}", other);
            std::process::exit(2);
        }
    }

    Ok(())
}
