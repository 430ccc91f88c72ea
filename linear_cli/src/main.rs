//! Entry point for the Linear MCP server binary.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use linear_api::LinearClient;
use linear_mcp::LinearMcpServer;

use crate::cli::LinearMcpCli;

fn main() -> ExitCode {
    // Logging goes to stderr; stdout belongs to the MCP transport.
    env_logger::init();

    let cli = LinearMcpCli::parse();

    let Some(api_key) = cli.api_key.filter(|key| !key.is_empty()) else {
        eprintln!("Error: LINEAR_API_KEY environment variable is required");
        eprintln!();
        eprintln!("Run the server with your Linear API key:");
        eprintln!("  LINEAR_API_KEY=your-api-key linear-mcp");
        eprintln!();
        eprintln!("Or set it in your environment:");
        eprintln!("  export LINEAR_API_KEY=your-api-key");
        eprintln!("  linear-mcp");
        return ExitCode::FAILURE;
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    rt.block_on(async {
        let client = match LinearClient::new(api_key) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to create Linear client: {e}");
                return ExitCode::FAILURE;
            }
        };

        debug!("Starting Linear MCP server on stdio");
        let server = LinearMcpServer::new(client);
        if let Err(e) = server.serve_stdio().await {
            eprintln!("MCP server error: {e}");
            return ExitCode::FAILURE;
        }
        ExitCode::SUCCESS
    })
}
