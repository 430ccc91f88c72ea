use clap::Parser;

/// Defines the command-line interface for the Linear MCP server with clap.
#[derive(Parser, Debug)]
#[command(name = "linear-mcp")]
#[command(version, about = "Linear MCP server: Linear issue tracking over the Model Context Protocol.")]
pub struct LinearMcpCli {
    /// Linear API key. Read from the LINEAR_API_KEY environment variable when
    /// not passed explicitly.
    #[arg(long, env = "LINEAR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        LinearMcpCli::command().debug_assert();
    }

    #[test]
    fn test_api_key_flag() {
        let cli = LinearMcpCli::parse_from(["linear-mcp", "--api-key", "lin_api_x"]);
        assert_eq!(cli.api_key.as_deref(), Some("lin_api_x"));
    }
}
