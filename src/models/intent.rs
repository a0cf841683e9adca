use serde::{Deserialize, Serialize};

/// The closed set of operations a query can route to. `Assistant` is the
/// low-confidence fallback and is never produced by a scorer directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    FileSearch,
    Organizer,
    Linter,
    Ocr,
    Converter,
    Assistant,
}

/// Classification order for the scored operations. Iterating a fixed list
/// makes exact-score ties deterministic: the earlier operation wins.
pub const SCORED_OPERATIONS: [Operation; 5] = [
    Operation::FileSearch,
    Operation::Organizer,
    Operation::Linter,
    Operation::Ocr,
    Operation::Converter,
];

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileSearch => write!(f, "filesearch"),
            Self::Organizer => write!(f, "organizer"),
            Self::Linter => write!(f, "linter"),
            Self::Ocr => write!(f, "ocr"),
            Self::Converter => write!(f, "converter"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filesearch" => Ok(Self::FileSearch),
            "organizer" => Ok(Self::Organizer),
            "linter" => Ok(Self::Linter),
            "ocr" => Ok(Self::Ocr),
            "converter" => Ok(Self::Converter),
            "assistant" => Ok(Self::Assistant),
            _ => Err(format!("unknown operation: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizeMode {
    Category,
    Filename,
}

impl std::fmt::Display for OrganizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Filename => write!(f, "filename"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrMode {
    Screen,
    File,
}

impl std::fmt::Display for OcrMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Screen => write!(f, "screen"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Parameters a scorer extracted from the raw query, one shape per operation.
/// The router's resolution fallbacks match on these exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationParams {
    Search {
        query: String,
    },
    Organize {
        mode: Option<OrganizeMode>,
        path: Option<String>,
    },
    Lint {
        path: Option<String>,
    },
    Ocr {
        mode: OcrMode,
        path: Option<String>,
    },
    Convert {
        path: Option<String>,
        from_format: Option<String>,
        to_format: Option<String>,
    },
    Assistant {
        query: String,
    },
}

/// A runner-up operation recorded alongside the winning intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub operation: Operation,
    pub confidence: f64,
}

/// The classifier's decision for one query. Constructed fresh per call and
/// discarded after routing; the winner's confidence is never below any
/// listed alternative's.
#[derive(Debug, Clone, Serialize)]
pub struct Intent {
    pub operation: Operation,
    pub confidence: f64,
    pub params: OperationParams,
    pub alternatives: Vec<Alternative>,
}
