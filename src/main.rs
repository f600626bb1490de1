use carebridge::config::cli::{Command, FormArgs, ThemeAction};
use carebridge::core::theme::{ThemeToggle, THEME_KEY};
use carebridge::core::PreferenceStore;
use carebridge::domain::model::Theme;
use carebridge::utils::error::{CareBridgeError, ErrorSeverity};
use carebridge::utils::{logger, validation::Validate};
use carebridge::{
    CareBridgeApp, ClientSettings, CliConfig, FixedLocation, HttpAnalysisService,
    JsonFilePreferences, LocalStorage, NoDictation, SubmitOutcome, TerminalView,
};
use clap::Parser;

type TerminalApp = CareBridgeApp<
    HttpAnalysisService,
    LocalStorage,
    JsonFilePreferences,
    NoDictation,
    FixedLocation,
>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting carebridge CLI");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve_settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    match &config.command {
        Command::Analyze(form) => {
            let mut app = build_app(&settings, form.location.coordinates());
            let mut view = form_view(form);
            app.load(&mut view);

            match app.submit(&mut view).await {
                SubmitOutcome::Rendered(_) => {
                    app.find_hospital(&mut view).await;
                }
                SubmitOutcome::Rejected => std::process::exit(1),
                SubmitOutcome::Failed => std::process::exit(2),
            }
        }
        Command::Report(form) => {
            let mut app = build_app(&settings, form.location.coordinates());
            let mut view = form_view(form);
            app.load(&mut view);

            // 報告只在分析成功後開放
            match app.submit(&mut view).await {
                SubmitOutcome::Rendered(_) => {}
                SubmitOutcome::Rejected => std::process::exit(1),
                SubmitOutcome::Failed => std::process::exit(2),
            }

            match app.download_report(&mut view).await {
                Some(location) => println!("📁 Report saved to: {}", location),
                None => std::process::exit(2),
            }
        }
        Command::Theme { action } => {
            let preferences = JsonFilePreferences::new(&settings.preferences_path);
            let mut view = TerminalView::stdout();

            match action {
                ThemeAction::Show => {
                    let stored = preferences
                        .get_item(THEME_KEY)
                        .unwrap_or_else(|e| exit_with(&e));
                    println!("🎨 Theme: {}", Theme::from_stored(stored.as_deref()));
                }
                ThemeAction::Toggle => {
                    let mut theme = ThemeToggle::new(preferences);
                    theme.restore(&mut view);
                    theme.toggle(&mut view);
                }
            }
        }
        Command::Shell(location) => {
            let mut app = build_app(&settings, location.coordinates());
            let mut view = TerminalView::stdout();
            println!("🚑 CareBridge AI: type `help` for commands");

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            carebridge::shell::run_shell(stdin, &mut app, &mut view).await?;
        }
    }

    Ok(())
}

fn build_app(
    settings: &ClientSettings,
    position: Option<carebridge::domain::model::Coordinates>,
) -> TerminalApp {
    let service = HttpAnalysisService::new(&settings.base_url)
        .with_paths(&settings.analyze_path, &settings.report_path);
    let storage = LocalStorage::new(settings.download_dir.clone());
    let preferences = JsonFilePreferences::new(&settings.preferences_path);

    CareBridgeApp::new(
        service,
        storage,
        preferences,
        NoDictation,
        FixedLocation::new(position),
    )
    .with_report_filename(&settings.report_filename)
    .with_glow(settings.pointer_glow)
}

fn form_view(form: &FormArgs) -> TerminalView<std::io::Stdout> {
    TerminalView::stdout().with_input(&form.symptoms, &form.age)
}

fn exit_with(e: &CareBridgeError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
