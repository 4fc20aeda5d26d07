use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid input path: {path} is neither a file nor a directory")]
    InvalidInputPath { path: String },

    #[error("Malformed provider reference in {document}: {provider}")]
    MalformedProviderReference { document: String, provider: String },

    #[error("Malformed <{element}> in {document}: {reason}")]
    MalformedElement {
        document: String,
        element: String,
        reason: String,
    },

    #[error("XML parsing failed for {document}: {message}")]
    XmlParse { document: String, message: String },

    #[error("Graph style error: {message}")]
    StyleError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Graph rendering failed: {message}")]
    RenderError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Document,
    Configuration,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnalysisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::InvalidInputPath { .. } => ErrorCategory::Input,
            AnalysisError::MalformedProviderReference { .. }
            | AnalysisError::MalformedElement { .. }
            | AnalysisError::XmlParse { .. } => ErrorCategory::Document,
            AnalysisError::StyleError { .. } | AnalysisError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            AnalysisError::RenderError { .. } => ErrorCategory::Rendering,
            AnalysisError::IoError(_) | AnalysisError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Document => ErrorSeverity::Medium,
            ErrorCategory::Rendering | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程式結束碼，依嚴重程度決定
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInputPath { .. } => {
                "Check that every --paths-to-analyze entry exists and is readable"
            }
            AnalysisError::MalformedProviderReference { .. } => {
                "Provider must look like /modules/module[type='<type>'][name='<name>']"
            }
            AnalysisError::MalformedElement { .. } => {
                "Make sure every module and service carries its <type> and <name> children"
            }
            AnalysisError::XmlParse { .. } => "Fix the XML syntax or remove the file from the input",
            AnalysisError::StyleError { .. } => {
                "The style file must be TOML with [graph], [nodes], [edges] and [nodes_of_interest] tables"
            }
            AnalysisError::InvalidConfigValue { .. } => "Run with --help to see accepted values",
            AnalysisError::RenderError { .. } => {
                "Install Graphviz (the `dot` executable) or use --graph-format dot"
            }
            AnalysisError::IoError(_) => "Check file permissions and free disk space",
            AnalysisError::SerializationError(_) => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalysisError::InvalidInputPath { path } => format!("Cannot analyze '{}': no such file or directory", path),
            AnalysisError::MalformedProviderReference { document, provider } => {
                format!("{} contains an unsupported provider reference '{}'", document, provider)
            }
            AnalysisError::RenderError { message } => format!("Could not render the graph: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
