use clap::Parser;
use lead_quote::core::ConfigProvider;
use lead_quote::utils::logger;
use lead_quote::utils::validation::{normalize_phone, Validate};
use lead_quote::{poll_remote_quote, AppConfig, HttpLeadGateway, RemoteQuote};

#[derive(Parser)]
#[command(name = "quote-status")]
#[command(about = "Check the backend for a server-side cleaning quote")]
struct Args {
    /// Phone number the lead was submitted with
    #[arg(short, long)]
    phone: String,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = "lead-quote.toml")]
    config: String,

    /// Override poll attempts from config
    #[arg(long)]
    attempts: Option<u32>,

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
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let Some(phone) = normalize_phone(&args.phone) else {
        eprintln!("❌ '{}' is not a 10-digit US phone number", args.phone);
        std::process::exit(1);
    };

    let attempts = args.attempts.unwrap_or_else(|| config.poll_attempts());
    let gateway = HttpLeadGateway::new(config.backend_endpoint(), config.request_timeout())?;

    tracing::info!("🔍 Polling quote for {} ({} attempt(s))", phone, attempts);
    let quote = poll_remote_quote(&gateway, &phone, attempts, config.poll_interval()).await?;

    match quote {
        RemoteQuote::Ready {
            estimated_price,
            price_breakdown,
        } => {
            println!("✅ Quote ready: {}", estimated_price);
            if let Some(breakdown) = price_breakdown {
                println!("{}", breakdown);
            }
        }
        RemoteQuote::Pending => {
            let waited = config.poll_interval() * attempts.saturating_sub(1);
            println!(
                "⏳ Quote still pending after {:?}; we'll follow up by phone.",
                waited
            );
        }
        RemoteQuote::NotFound => {
            println!("❓ No lead found for {}", phone);
            std::process::exit(4);
        }
    }

    Ok(())
}
