/// Fixed name the exported report is offered under.
pub const REPORT_FILENAME: &str = "تقرير_المواريث.pdf";

/// Opaque document returned by the export endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportDocument {
    pub bytes: Vec<u8>,
    /// `Content-Type` reported by the service, if any.
    pub content_type: Option<String>,
}

impl ReportDocument {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(
        mut self,
        content_type: impl Into<String>,
    ) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
