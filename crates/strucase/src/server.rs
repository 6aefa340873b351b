//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the case engine over MCP on stdio. Each `#[tool]` method parses
//! its parameters, delegates to `strucase_core` and returns the result as
//! JSON text. Unset parameters fall back to the loaded configuration.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use strucase_core::{Config, Converter, Dialect, ValidationOptions, sanitize, tokenize};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `convert_case` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ConvertCaseParams {
    /// The identifier to convert.
    pub input: String,
    /// Input dialect, e.g. "any", "snake_case", "camel".
    pub from: Option<String>,
    /// Output dialect, e.g. "kebab-case", "SCREAMING_SNAKE_CASE".
    pub to: Option<String>,
    /// Validation flags, e.g. "VALIDATE|ACCEPT_DIGITS".
    pub options: Option<String>,
}

/// Parameters for the `check_case` and `tokenize_case` tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CaseParams {
    /// The identifier to inspect.
    pub input: String,
    /// Dialect of the identifier.
    pub case: Option<String>,
    /// Validation flags, e.g. "VALIDATE|NO_LEADING_DIGITS".
    pub options: Option<String>,
}

#[derive(Debug, Serialize)]
struct TokenizeResult {
    sanitized: String,
    words: Vec<String>,
}

/// MCP server exposing the case engine to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    defaults: Converter,
    max_input: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a server whose defaults come from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            tool_router: Self::tool_router(),
            defaults: config.converter(),
            max_input: config.input_limit(),
        }
    }

    fn check_size(&self, input: &str) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if input.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", input.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn dialect(name: Option<&str>, default: Dialect) -> Result<Dialect, McpError> {
        name.map_or(Ok(default), |name| {
            name.parse()
                .map_err(|e: strucase_core::CaseError| McpError::invalid_params(e.to_string(), None))
        })
    }

    fn options(&self, flags: Option<&str>) -> Result<ValidationOptions, McpError> {
        flags.map_or(Ok(self.defaults.options), |flags| {
            flags
                .parse()
                .map_err(|e: strucase_core::CaseError| McpError::invalid_params(e.to_string(), None))
        })
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        if params.format == "json" {
            return to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
                "input_case": self.defaults.from.name(),
                "output_case": self.defaults.to.name(),
                "options": self.defaults.options.to_string(),
            }));
        }
        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Convert an identifier between dialects.
    #[tool(
        description = "Convert an identifier from one case dialect to another (camelCase, snake_case, kebab-case, ...). Returns the output and the intermediate words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn convert_case(
        &self,
        Parameters(params): Parameters<ConvertCaseParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.input)?;
        let converter = Converter::new(
            Self::dialect(params.from.as_deref(), self.defaults.from)?,
            Self::dialect(params.to.as_deref(), self.defaults.to)?,
            self.options(params.options.as_deref())?,
        );
        tracing::debug!(tool = "convert_case", from = %converter.from, to = %converter.to, "executing MCP tool");

        let report = converter
            .report(&params.input)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        tracing::info!(tool = "convert_case", "MCP tool completed");
        to_json(&report)
    }

    /// Check an identifier against a dialect.
    #[tool(description = "Check whether an identifier is valid in a case dialect. Use options \"VALIDATE\" for a structural check.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_case(
        &self,
        Parameters(params): Parameters<CaseParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.input)?;
        let checker = Converter::new(
            Self::dialect(params.case.as_deref(), self.defaults.from)?,
            self.defaults.to,
            self.options(params.options.as_deref())?,
        );
        let check = checker.check(&params.input);
        tracing::info!(tool = "check_case", valid = check.valid, "MCP tool completed");
        to_json(&check)
    }

    /// Split an identifier into words.
    #[tool(description = "Split an identifier into lowercase words according to its case dialect.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn tokenize_case(
        &self,
        Parameters(params): Parameters<CaseParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.input)?;
        let dialect = Self::dialect(params.case.as_deref(), self.defaults.from)?;
        let options = self.options(params.options.as_deref())?;
        let sanitized = sanitize(&params.input, dialect, options);
        let words = tokenize(&sanitized, dialect);
        tracing::info!(tool = "tokenize_case", words = words.len(), "MCP tool completed");
        to_json(&TokenizeResult { sanitized, words })
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Convert, check and tokenize identifiers in case dialects such as camelCase, snake_case and kebab-case.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
