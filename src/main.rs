use clap::Parser;
use poker_rooms::app::render;
use poker_rooms::utils::error::{DirectoryError, ErrorSeverity};
use poker_rooms::utils::{logger, validation::Validate};
use poker_rooms::{
    BuiltinSource, CliConfig, DirectoryConfig, FileSource, LocalStorage, Result, Session,
    VenueCatalog, VenueId, VenueSource, ViewMode,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    let file_config = match &config.config {
        Some(path) => DirectoryConfig::from_file(path),
        None => Ok(DirectoryConfig::default()),
    };

    // 初始化日誌
    let level = file_config
        .as_ref()
        .ok()
        .and_then(|c| c.log_level())
        .map(str::to_string);
    if config.json_logs {
        logger::init_json_logger(config.verbose, level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, level.as_deref());
    }

    tracing::info!("Starting poker-rooms");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match file_config {
        Ok(file_config) => run(&config, &file_config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => std::process::exit(report(&e)),
    }
}

async fn run(config: &CliConfig, file_config: &DirectoryConfig) -> Result<String> {
    // 驗證配置
    config.validate()?;
    file_config.validate()?;

    let source: Box<dyn VenueSource> = match config.data.as_deref().or(file_config.data_path()) {
        Some(path) => Box::new(FileSource::new(LocalStorage::default(), path)),
        None => Box::new(BuiltinSource),
    };
    tracing::info!("📁 Loading venues from {}", source.describe());

    let catalog = VenueCatalog::new(source.load().await?)?;
    tracing::info!("✅ {} ready with {} venues", file_config.name(), catalog.len());

    let mut session = Session::new(&catalog);

    if config.vocabulary {
        return Ok(render::render_vocabulary(session.vocabulary()));
    }

    if config.highlights {
        let limit = config
            .highlight_limit
            .unwrap_or_else(|| file_config.highlight_limit());
        return Ok(render::render_highlights(catalog.venues(), limit));
    }

    let view = match &config.view {
        Some(view) => view.parse::<ViewMode>()?,
        None => file_config.default_view()?,
    };
    session.set_view(view);

    for change in config.criteria_changes() {
        session.apply(change);
    }
    if session.criteria().has_active_filters() {
        tracing::info!("🔍 Filters: {:?}", session.criteria());
    }

    if let Some(id) = &config.show {
        let venue = session.open_detail(&VenueId::new(id.as_str()))?;
        return Ok(render::render_detail(venue));
    }

    Ok(render::render_results(&session))
}

/// 記錄錯誤並依嚴重程度回傳結束碼
fn report(e: &DirectoryError) -> i32 {
    tracing::error!(
        "❌ Failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
