use clap::Parser;
use lead_quote::adapters::booking::booking_link;
use lead_quote::core::ConfigProvider;
use lead_quote::utils::error::{ErrorSeverity, QuoteError};
use lead_quote::utils::{logger, validation::Validate};
use lead_quote::{
    calculate_quote, submit_best_effort, AppConfig, CliConfig, HttpLeadGateway, LeadForm,
    LeadSubmission, LocalStorage, Quote, SessionHandoff,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.as_deref() {
        Some(path) => match load_app_config(path) {
            Ok(app) => run(&cli, &app).await,
            Err(e) => Err(e),
        },
        None => match cli.validate() {
            Ok(()) => run(&cli, &cli).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Quote failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_app_config(path: &str) -> Result<AppConfig, QuoteError> {
    tracing::info!("📁 Loading configuration from: {}", path);
    let config = AppConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

async fn run<C: ConfigProvider>(cli: &CliConfig, config: &C) -> Result<(), QuoteError> {
    let intake = LeadForm::from_file(&cli.intake)?.into_intake()?;
    tracing::info!(
        "Quoting {} lead for {}",
        if intake.is_move_out() { "move-out" } else { "standard" },
        intake.contact.phone
    );

    let quote = calculate_quote(&intake);
    print_quote(&quote, cli.json)?;

    if let Some(session_id) = &cli.session_id {
        let handoff = SessionHandoff::new(LocalStorage::new(
            config.session_storage_path().to_string(),
        ));
        handoff.save(session_id, &intake, &quote).await?;
        tracing::info!("💾 Quote saved for session {}", session_id);
    }

    if let Some(widget_url) = config.booking_widget_url() {
        println!("Book: {}", booking_link(widget_url, &intake.contact.phone)?);
    }

    if cli.submit {
        let gateway = HttpLeadGateway::new(config.backend_endpoint(), config.request_timeout())?;
        let submission = LeadSubmission::new(&intake, &quote);
        let outcome = submit_best_effort(&gateway, &submission, config.request_timeout()).await;
        if !outcome.is_accepted() {
            eprintln!("⚠️  Lead was not recorded by the backend; the quote above still stands.");
        }
    }

    Ok(())
}

fn print_quote(quote: &Quote, as_json: bool) -> Result<(), QuoteError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&quote.summary())?);
        return Ok(());
    }

    println!("{}", quote.breakdown());
    if quote.has_unpriced_add_ons() {
        println!("Note: some add-ons are not in our catalog and will be priced on review.");
    }
    Ok(())
}
