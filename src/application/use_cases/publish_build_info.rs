use crate::application::dto::PublishBuildRequest;
use crate::build_info::domain::Sha256Summary;
use crate::build_info::services::BuildInfoService;
use crate::ports::outbound::{DocumentReader, HttpTransport, OutputPresenter, ProgressReporter};
use crate::shared::Result;

/// PublishBuildInfoUseCase - Deploys a build-info document
///
/// In dry-run mode the document is handed to the presenter as indented JSON
/// and nothing is sent.
pub struct PublishBuildInfoUseCase<DR, T: HttpTransport, PR> {
    document_reader: DR,
    build_info_service: BuildInfoService<T>,
    progress_reporter: PR,
}

impl<DR, T, PR> PublishBuildInfoUseCase<DR, T, PR>
where
    DR: DocumentReader,
    T: HttpTransport,
    PR: ProgressReporter,
{
    pub fn new(
        document_reader: DR,
        build_info_service: BuildInfoService<T>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            document_reader,
            build_info_service,
            progress_reporter,
        }
    }

    pub async fn execute(
        &self,
        request: PublishBuildRequest,
        presenter: &dyn OutputPresenter,
    ) -> Result<Sha256Summary> {
        self.progress_reporter.report(&format!(
            "📖 Loading build info from: {}",
            request.build_info_path.display()
        ));
        let build = self
            .document_reader
            .read_build_info(&request.build_info_path)?;

        if request.dry_run {
            presenter.present(&serde_json::to_string_pretty(&build)?)?;
            self.progress_reporter
                .report_completion("🧪 Dry run: build info was not published");
            return Ok(Sha256Summary::new());
        }

        self.progress_reporter.report(&format!(
            "📤 Publishing build info {}/{}...",
            build.name, build.number
        ));
        let summary = self
            .build_info_service
            .publish(&build, request.project.as_deref())
            .await
            .map_err(|e| {
                self.progress_reporter
                    .report_error("❌ Build info publish failed");
                e
            })?;

        let message = match summary.sha256() {
            Some(sha256) => format!("✅ Build info published (sha256: {})", sha256),
            None => "✅ Build info published".to_string(),
        };
        self.progress_reporter.report_completion(&message);
        Ok(summary)
    }
}
