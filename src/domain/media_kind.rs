pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// How an upload is routed, decided from its declared media type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Pdf,
    NeedsConversion,
}

impl MediaKind {
    /// Only an exact `application/pdf` counts as PDF. The bytes are never
    /// sniffed, so an absent or mislabeled type goes through conversion.
    pub fn classify(declared: Option<&str>) -> Self {
        match declared {
            Some(PDF_MEDIA_TYPE) => Self::Pdf,
            _ => Self::NeedsConversion,
        }
    }

    pub fn needs_conversion(&self) -> bool {
        matches!(self, Self::NeedsConversion)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::NeedsConversion => "needs_conversion",
        }
    }
}
