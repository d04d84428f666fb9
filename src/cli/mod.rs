use crate::{register_calculator_tools, Calculator, FunctionFactory};
use clap::{Arg, ArgMatches, Command};
use serde_json::Value;
use tracing::{error, info};

fn command() -> Command {
    Command::new("toolbot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calculator tools: expressions, scientific functions and unit conversion")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("Print the available tool definitions"))
        .subcommand(
            Command::new("call")
                .about("Invoke a tool and print its JSON reply")
                .arg(
                    Arg::new("tool")
                        .help("Tool name, e.g. calculator_calculate_expression")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("args")
                        .short('a')
                        .long("args")
                        .value_name("JSON")
                        .help("Tool arguments as a JSON object")
                        .default_value("{}"),
                ),
        )
}

/// CLI entry point for the toolbot binary
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = command().get_matches();

    let mut function_factory = FunctionFactory::new();
    register_calculator_tools(&mut function_factory, Calculator::new());

    match matches.subcommand() {
        Some(("list", _)) => {
            let definitions = Value::Array(function_factory.get_tool_definitions());
            println!("{}", serde_json::to_string_pretty(&definitions)?);
        }
        Some(("call", sub)) => call(&function_factory, sub).await?,
        _ => unreachable!("clap enforces a subcommand"),
    }

    Ok(())
}

async fn call(
    function_factory: &FunctionFactory,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let tool = matches
        .get_one::<String>("tool")
        .ok_or("tool name is required")?;
    let raw_args = matches
        .get_one::<String>("args")
        .map(String::as_str)
        .unwrap_or("{}");
    let arguments: Value = serde_json::from_str(raw_args)?;

    info!("Calling tool: {}", tool);
    match function_factory.execute_function(tool, arguments).await {
        Ok(reply) => {
            println!("{}", serde_json::to_string_pretty(&reply)?);
            Ok(())
        }
        Err(e) => {
            error!("Tool call failed: {}", e);
            println!("{}", serde_json::to_string_pretty(&e.to_error_payload())?);
            Err(e.into())
        }
    }
}
