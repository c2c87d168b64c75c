use crate::{models::CalculationRequest, render::ChartHandle};

/// Identity of one submitted calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Pending { in_flight: usize },
}

struct Submission {
    ticket: Ticket,
    request: CalculationRequest,
}

/// State owned by one page instance.
///
/// Written only by the [`SessionController`](super::SessionController); the
/// chart slot is lent to the result renderer and to nothing else.
#[derive(Default)]
pub struct Session {
    last: Option<Submission>,
    active_chart: Option<Box<dyn ChartHandle>>,
    issued: u64,
    in_flight: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `request` as the latest submission and returns its ticket.
    pub fn record(
        &mut self,
        request: CalculationRequest,
    ) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.last = Some(Submission { ticket, request });
        ticket
    }

    /// `true` while no later submission has replaced the one behind `ticket`.
    pub fn is_current(
        &self,
        ticket: Ticket,
    ) -> bool {
        self.last.as_ref().is_some_and(|s| s.ticket == ticket)
    }

    pub fn last_request(&self) -> Option<&CalculationRequest> {
        self.last.as_ref().map(|s| &s.request)
    }

    pub fn has_chart(&self) -> bool {
        self.active_chart.is_some()
    }

    pub(crate) fn chart_slot(&mut self) -> &mut Option<Box<dyn ChartHandle>> {
        &mut self.active_chart
    }

    /// Returns `true` when this call moved the session from idle to pending.
    pub(crate) fn begin_call(&mut self) -> bool {
        self.in_flight += 1;
        self.in_flight == 1
    }

    /// Returns `true` when this call moved the session back to idle.
    pub(crate) fn end_call(&mut self) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.in_flight == 0
    }

    pub fn status(&self) -> SessionStatus {
        match self.in_flight {
            0 => SessionStatus::Idle,
            in_flight => SessionStatus::Pending { in_flight },
        }
    }
}
