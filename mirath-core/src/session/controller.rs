use std::cell::RefCell;

use tracing::{debug, info, warn};

use super::{
    error::SessionError,
    state::{Session, SessionStatus},
};
use crate::{
    form::{ControlId, FormControls, apply_visibility, read_request, restore_defaults},
    models::{CalculationRequest, REPORT_FILENAME},
    presentation::Presentation,
    render::ResultRenderer,
    rules::visibility_for_value,
    service::ShareService,
};

/// What became of a `calculate()` call that reached the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculateOutcome {
    /// The response was painted.
    Rendered,
    /// A later calculation was submitted before this one completed; its
    /// response was dropped.
    Superseded,
}

/// Drives one page: reads the form, talks to the service, paints results.
///
/// Operations take `&self` so that a new calculation can start while an
/// earlier one is still suspended on the network. The session is only
/// borrowed between suspension points.
pub struct SessionController<P: Presentation> {
    service: Box<dyn ShareService>,
    presentation: P,
    session: RefCell<Session>,
}

impl<P: Presentation> SessionController<P> {
    pub fn new(
        service: Box<dyn ShareService>,
        presentation: P,
    ) -> Self {
        Self {
            service,
            presentation,
            session: RefCell::new(Session::new()),
        }
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Tears the session down, releasing the live chart, and returns the page.
    pub fn into_presentation(self) -> P {
        if let Some(chart) = self.session.into_inner().chart_slot().take() {
            chart.release();
        }
        self.presentation
    }

    pub fn status(&self) -> SessionStatus {
        self.session.borrow().status()
    }

    pub fn last_request(&self) -> Option<CalculationRequest> {
        self.session.borrow().last_request().cloned()
    }

    pub fn has_active_chart(&self) -> bool {
        self.session.borrow().has_chart()
    }

    /// Brings the spouse groups in line with the gender on page load.
    pub fn initialize(
        &self,
        form: &mut dyn FormControls,
    ) {
        self.on_gender_changed(form);
    }

    pub fn on_gender_changed(
        &self,
        form: &mut dyn FormControls,
    ) {
        let gender = form.value(ControlId::DeceasedGender);
        apply_visibility(form, visibility_for_value(gender.as_deref()));
    }

    /// Submits the form to the calculation service and renders the answer.
    ///
    /// The request becomes the session's last request before the call is
    /// dispatched. If another calculation is submitted while this one is in
    /// flight, this one's response is discarded when it arrives.
    ///
    /// # Errors
    ///
    /// Every error has already been delivered to the page as a notification.
    /// * [`SessionError::Validation`]: the form is invalid; nothing was sent.
    /// * [`SessionError::Calculation`]: transport failure, non-success
    ///   status or unreadable payload.
    /// * [`SessionError::DataInconsistency`]: the response cannot be rendered.
    pub async fn calculate(
        &self,
        form: &dyn FormControls,
    ) -> Result<CalculateOutcome, SessionError> {
        let request = read_request(form).map_err(|e| self.fail(e.into()))?;

        let ticket = self.session.borrow_mut().record(request.clone());
        debug!(ticket = ticket.get(), estate = %request.estate, "calculation submitted");

        let response = {
            let _in_flight = self.call_started();
            self.service.calculate(&request).await
        };

        if !self.session.borrow().is_current(ticket) {
            match &response {
                Ok(_) => debug!(ticket = ticket.get(), "discarding superseded response"),
                Err(error) => warn!(ticket = ticket.get(), %error, "superseded calculation failed"),
            }
            return Ok(CalculateOutcome::Superseded);
        }

        let result = response.map_err(|e| self.fail(SessionError::Calculation(e)))?;

        let mut session = self.session.borrow_mut();
        ResultRenderer::render(&result, request.estate, &self.presentation, session.chart_slot())
            .map_err(|e| self.fail(e.into()))?;

        info!(heirs = result.labels.len(), "calculation rendered");
        Ok(CalculateOutcome::Rendered)
    }

    /// Sends the last submitted request to the export service and offers the
    /// returned document as a download.
    ///
    /// # Errors
    ///
    /// Every error has already been delivered to the page as a notification.
    /// * [`SessionError::NoSession`]: nothing was ever submitted; nothing was sent.
    /// * [`SessionError::Export`]: the service call failed.
    /// * [`SessionError::Download`]: the page could not take the document.
    pub async fn export_report(&self) -> Result<(), SessionError> {
        let request = self
            .last_request()
            .ok_or_else(|| self.fail(SessionError::NoSession))?;

        let response = {
            let _in_flight = self.call_started();
            self.service.export_report(&request).await
        };

        let document = response.map_err(|e| self.fail(SessionError::Export(e)))?;
        self.presentation
            .offer_download(REPORT_FILENAME, &document)
            .map_err(|e| self.fail(e.into()))?;

        info!(bytes = document.len(), "report offered for download");
        Ok(())
    }

    /// Restores the form defaults and hides the results area.
    ///
    /// The session is untouched: the last request stays exportable and the
    /// chart handle stays alive until the next render replaces it.
    pub fn reset(
        &self,
        form: &mut dyn FormControls,
    ) {
        restore_defaults(form);
        self.presentation.show_results(false);
        debug!("form reset");
    }

    fn fail(
        &self,
        error: SessionError,
    ) -> SessionError {
        warn!(%error, "operation failed");
        self.presentation.notify(&error.notification());
        error
    }

    fn call_started(&self) -> InFlight<'_, P> {
        let became_busy = self.session.borrow_mut().begin_call();
        if became_busy {
            self.presentation.set_busy(true);
        }
        InFlight {
            session: &self.session,
            presentation: &self.presentation,
        }
    }
}

/// Marks one service call as in flight until dropped, including when the
/// calling future is dropped mid-await.
struct InFlight<'a, P: Presentation> {
    session: &'a RefCell<Session>,
    presentation: &'a P,
}

impl<P: Presentation> Drop for InFlight<'_, P> {
    fn drop(&mut self) {
        let became_idle = self.session.borrow_mut().end_call();
        if became_idle {
            self.presentation.set_busy(false);
        }
    }
}
