use std::{io::Write, path::PathBuf};

use anyhow::Context;
use mirath_core::{
    ServiceConfig, SessionController,
    form::{InMemoryForm, restore_defaults},
    service::ServiceRegistry,
};
use mirath_http::HttpServiceFactory;
use tracing::{debug, info};

use crate::{form_file, terminal::TerminalPresentation};

/// Builds the registry of every service backend this binary ships with.
pub fn build_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register(Box::new(HttpServiceFactory));
    registry
}

/// One run of the calculator, already resolved from settings and flags.
#[derive(Debug, Clone, Default)]
pub struct Job {
    pub service: ServiceConfig,
    pub form_file: Option<PathBuf>,
    pub assignments: Vec<String>,
    pub export: bool,
    pub download_dir: PathBuf,
}

/// Fills the form the way a user would, starting from the page defaults.
pub fn prepare_form(job: &Job) -> anyhow::Result<InMemoryForm> {
    let mut form = InMemoryForm::new();
    restore_defaults(&mut form);

    if let Some(path) = &job.form_file {
        form_file::apply_file(&mut form, path)?;
    }
    for assignment in &job.assignments {
        form_file::apply_assignment(&mut form, assignment)?;
    }
    Ok(form)
}

/// Calculates once and, when asked, exports the report.
///
/// The export runs whenever a request was submitted, even if the calculation
/// itself failed. Failures the page already showed to the user are returned
/// as errors too, so the process exits non-zero.
pub async fn run<W: Write>(
    job: &Job,
    registry: &ServiceRegistry,
    out: W,
) -> anyhow::Result<TerminalPresentation<W>> {
    let mut form = prepare_form(job)?;

    debug!(backend = %job.service.backend, "creating share service");
    let service = registry.create(&job.service).await?;
    let controller = SessionController::new(
        service,
        TerminalPresentation::new(out, job.download_dir.clone()),
    );

    controller.initialize(&mut form);
    let calculated = controller.calculate(&form).await;
    if let Ok(outcome) = &calculated {
        info!(?outcome, "calculation finished");
    }

    let exported = if job.export && controller.last_request().is_some() {
        controller.export_report().await
    } else {
        Ok(())
    };

    calculated.context("calculation failed")?;
    exported.context("report export failed")?;
    Ok(controller.into_presentation())
}
