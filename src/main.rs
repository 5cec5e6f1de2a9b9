use artifact_scan::adapters::outbound::console::StderrProgressReporter;
use artifact_scan::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
use artifact_scan::adapters::outbound::network::ReqwestTransport;
use artifact_scan::application::dto::{PublishBuildRequest, ScanGraphRequest};
use artifact_scan::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use artifact_scan::application::use_cases::{
    GetBuildInfoUseCase, PublishBuildInfoUseCase, ScanGraphUseCase,
};
use artifact_scan::build_info::domain::BuildInfoParams;
use artifact_scan::build_info::services::BuildInfoService;
use artifact_scan::cli::{Args, Command, GetBuildArgs, PublishBuildArgs, ScanArgs};
use artifact_scan::config::{self, ConfigFile};
use artifact_scan::logging::{self, DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL};
use artifact_scan::ports::outbound::{OutputPresenter, ScanResultFormatter};
use artifact_scan::scanning::domain::ResultInclusion;
use artifact_scan::scanning::services::ScanService;
use artifact_scan::shared::{ExitCode, Result, ServiceDetails};
use clap::Parser;
use owo_colors::OwoColorize;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let settings = load_settings(&args)?;
    logging::init_tracing(
        settings.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL),
        settings.log_format.as_deref().unwrap_or(DEFAULT_LOG_FORMAT),
    )?;

    match args.command {
        Command::Scan(scan) => run_scan(scan, &settings).await,
        Command::PublishBuild(publish) => run_publish_build(publish, &settings).await,
        Command::GetBuild(get) => run_get_build(get, &settings).await,
    }
}

/// Config file (explicit or discovered) overlaid with command-line values
fn load_settings(args: &Args) -> Result<ConfigFile> {
    let from_file = match &args.global.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };

    let settings = from_file.merged_with(args.config_overrides());
    config::validate_config(&settings)?;
    Ok(settings)
}

fn transport_for(details: &ServiceDetails) -> Result<Arc<ReqwestTransport>> {
    Ok(Arc::new(ReqwestTransport::new(details.credentials().cloned())?))
}

async fn run_scan(scan: ScanArgs, settings: &ConfigFile) -> Result<ExitCode> {
    let details = settings.scanner_details()?;
    let service = ScanService::new(transport_for(&details)?, details).with_max_wait(settings.max_wait());

    let use_case = ScanGraphUseCase::new(
        FileSystemReader::new(),
        service,
        StderrProgressReporter::new(),
    );

    let request = ScanGraphRequest::new(scan.graph)
        .with_project(settings.project.clone())
        .with_repo_path(settings.repo_path.clone())
        .with_watches(settings.watches.clone().unwrap_or_default())
        .with_include(ResultInclusion::new(scan.vulnerabilities, scan.licenses));
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(scan.format));
    let formatted_output = FormatterFactory::create(scan.format).format(&response.result)?;
    PresenterFactory::create(PresenterType::from_output(scan.output)).present(&formatted_output)?;

    if response.has_build_failing_violations() {
        eprintln!(
            "{} {}",
            "❌ Build-failing violations detected:".red().bold(),
            response.summary()
        );
        return Ok(ExitCode::ViolationsDetected);
    }

    eprintln!("{} {}", "✅ Scan passed:".green(), response.summary());
    Ok(ExitCode::Success)
}

async fn run_publish_build(publish: PublishBuildArgs, settings: &ConfigFile) -> Result<ExitCode> {
    let details = settings.repository_details()?;
    let service = BuildInfoService::new(transport_for(&details)?, details);

    let use_case = PublishBuildInfoUseCase::new(
        FileSystemReader::new(),
        service,
        StderrProgressReporter::new(),
    );

    let request = PublishBuildRequest::new(
        publish.build_info,
        settings.project.clone(),
        publish.dry_run,
    );
    use_case.execute(request, &StdoutPresenter::new()).await?;
    Ok(ExitCode::Success)
}

async fn run_get_build(get: GetBuildArgs, settings: &ConfigFile) -> Result<ExitCode> {
    let details = settings.repository_details()?;
    let service = BuildInfoService::new(transport_for(&details)?, details);
    let use_case = GetBuildInfoUseCase::new(service, StderrProgressReporter::new());

    let params = BuildInfoParams::new(get.name, get.number).with_project(settings.project.clone());
    match use_case.execute(&params).await? {
        Some(published) => {
            let presenter: Box<dyn OutputPresenter> =
                PresenterFactory::create(PresenterType::from_output(get.output));
            presenter.present(&serde_json::to_string_pretty(&published)?)?;
            Ok(ExitCode::Success)
        }
        None => Ok(ExitCode::ApplicationError),
    }
}
