use std::fmt;

/// How the model is asked to transform the document.
///
/// `Structured` enforces a fixed per-row output schema; `Freeform` sends the
/// caller's instruction with no schema constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    Structured,
    Freeform,
}

impl ProcessingMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "structured" => Some(Self::Structured),
            "freeform" => Some(Self::Freeform),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Freeform => "freeform",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
