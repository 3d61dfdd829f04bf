//! Labelgraph CLI: demonstration driver for the labelgraph library
//!
//! Builds graphs from scenario definitions, runs shortest path queries and
//! prints the results.

mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use labelgraph::{
    Distance, Graph, GraphDisplay, GraphResult, PathDisplay, PathResult, QuerySpec,
    ScenarioOutcome, ScenarioSet,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "labelgraph", version, about = "Weighted graph shortest path demo")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "text", global = true, env = "LABELGRAPH_FORMAT")]
    format: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in sample scenarios
    Demo,
    /// Run every scenario in a YAML or JSON file
    Run {
        /// Scenario file (.yaml, .yml or .json)
        file: PathBuf,
    },
    /// Answer one shortest path query against a scenario's graph
    Path {
        /// Scenario file (.yaml, .yml or .json)
        file: PathBuf,

        /// Start vertex label
        #[arg(long)]
        from: String,

        /// End vertex label
        #[arg(long)]
        to: String,

        /// Scenario name (defaults to the first scenario in the file)
        #[arg(long)]
        scenario: Option<String>,
    },
    /// Start an interactive shell over an empty graph
    Shell,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Demo => run_scenarios(&ScenarioSet::builtin(), cli.format),
        Commands::Run { file } => {
            let set = load(&file)?;
            run_scenarios(&set, cli.format)
        }
        Commands::Path { file, from, to, scenario } => {
            let set = load(&file)?;
            let selected = match scenario {
                Some(name) => set.find(&name)?,
                None => set
                    .scenarios
                    .first()
                    .with_context(|| format!("{} contains no scenarios", file.display()))?,
            };
            let query = selected.clone().with_query(&from, &to);
            run_scenarios(&ScenarioSet { scenarios: vec![query] }, cli.format)
        }
        Commands::Shell => shell::run_shell(cli.format),
    }
}

fn load(file: &Path) -> Result<ScenarioSet> {
    ScenarioSet::from_path(file).with_context(|| format!("failed to load {}", file.display()))
}

fn run_scenarios(set: &ScenarioSet, format: OutputFormat) -> Result<()> {
    let mut outcomes = Vec::with_capacity(set.len());
    for scenario in &set.scenarios {
        let outcome = scenario
            .run()
            .with_context(|| format!("failed to build scenario {}", scenario.name))?;
        debug!("Scenario {} finished", outcome.name);
        outcomes.push(outcome);
    }

    match format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                print_text(outcome);
            }
        }
        OutputFormat::Json => {
            let values: Vec<serde_json::Value> = outcomes.iter().map(outcome_json).collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
        OutputFormat::Table => {
            for outcome in &outcomes {
                print_table(outcome);
            }
        }
    }

    Ok(())
}

fn print_text(outcome: &ScenarioOutcome) {
    println!("\nGraph: {}", outcome.name);
    print!("{}", GraphDisplay(&outcome.graph));
    if let (Some(request), Some(query)) = (&outcome.request, &outcome.query) {
        print!("{}", query_text(request, query));
    }
}

fn query_text(request: &QuerySpec, query: &GraphResult<PathResult>) -> String {
    let mut text = format!("Query: Shortest path from {} to {}\n", request.from, request.to);
    match query {
        Ok(result) => text.push_str(&PathDisplay(result).to_string()),
        Err(e) => text.push_str(&format!("Error: {}\n", e)),
    }
    text
}

fn print_table(outcome: &ScenarioOutcome) {
    println!("\n{}", outcome.name);
    println!("{}", edge_table(&outcome.graph));

    match &outcome.query {
        Some(Ok(result)) => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["From", "To", "Distance", "Path"]);
            let (distance, route) = if result.is_reachable() {
                (result.cost.to_string(), labelgraph::render::format_route(result))
            } else {
                ("unreachable".to_string(), "-".to_string())
            };
            table.add_row(vec![
                result.source.to_string(),
                result.target.to_string(),
                distance,
                route,
            ]);
            println!("{}", table);
        }
        Some(Err(e)) => println!("Error: {}", e),
        None => {}
    }
}

pub(crate) fn edge_table(graph: &Graph) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Source", "Destination", "Weight"]);
    for (source, destination, weight) in graph.adjacency_entries() {
        table.add_row(vec![
            source.to_string(),
            destination.to_string(),
            weight.to_string(),
        ]);
    }
    table
}

fn outcome_json(outcome: &ScenarioOutcome) -> serde_json::Value {
    let edges: Vec<serde_json::Value> = outcome
        .graph
        .adjacency_entries()
        .map(|(source, destination, weight)| {
            serde_json::json!({
                "source": source,
                "destination": destination,
                "weight": weight,
            })
        })
        .collect();

    let query = match (&outcome.request, &outcome.query) {
        (_, Some(Ok(result))) => serde_json::json!({
            "source": result.source,
            "target": result.target,
            "reachable": result.is_reachable(),
            "distance": result.is_reachable().then(|| distance_json(result.cost)),
            "path": result.path,
        }),
        (Some(request), Some(Err(e))) => serde_json::json!({
            "source": request.from,
            "target": request.to,
            "error": e.to_string(),
        }),
        (None, Some(Err(e))) => serde_json::json!({ "error": e.to_string() }),
        (_, None) => serde_json::Value::Null,
    };

    serde_json::json!({
        "name": outcome.name,
        "vertices": outcome.graph.labels().collect::<Vec<_>>(),
        "edges": edges,
        "query": query,
    })
}

/// JSON numbers stop at u64; longer distances are written as strings
fn distance_json(cost: Distance) -> serde_json::Value {
    match u64::try_from(cost) {
        Ok(cost) => serde_json::Value::from(cost),
        Err(_) => serde_json::Value::String(cost.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelgraph::{Scenario, Weight};

    fn outcome(name: &str) -> ScenarioOutcome {
        ScenarioSet::builtin().find(name).unwrap().run().unwrap()
    }

    #[test]
    fn test_outcome_json_reachable() {
        let value = outcome_json(&outcome("normal"));
        assert_eq!(value["name"], "normal");
        assert_eq!(value["vertices"], serde_json::json!(["A", "B", "C", "D"]));
        assert_eq!(value["edges"].as_array().unwrap().len(), 8);
        assert_eq!(value["query"]["reachable"], true);
        assert_eq!(value["query"]["distance"], 4);
        assert_eq!(value["query"]["path"], serde_json::json!(["A", "B", "C", "D"]));
    }

    #[test]
    fn test_outcome_json_unreachable_has_null_distance() {
        let value = outcome_json(&outcome("disconnected"));
        assert_eq!(value["query"]["reachable"], false);
        assert!(value["query"]["distance"].is_null());
        assert_eq!(value["query"]["path"], serde_json::json!([]));
    }

    #[test]
    fn test_outcome_json_query_error() {
        let value = outcome_json(&outcome("unknown-vertex"));
        assert_eq!(value["query"]["source"], "A");
        assert_eq!(value["query"]["target"], "C");
        assert_eq!(value["query"]["error"], "Vertex C does not exist");

        let plain = Scenario::new("plain").with_vertices(["A"]).run().unwrap();
        assert!(outcome_json(&plain)["query"].is_null());
    }

    #[test]
    fn test_outcome_json_wide_distance() {
        let scenario = Scenario::new("heavy")
            .with_vertices(["A", "B", "C"])
            .with_edge("A", "B", Weight::MAX)
            .with_edge("B", "C", Weight::MAX)
            .with_query("A", "C");
        let value = outcome_json(&scenario.run().unwrap());
        let expected = (2 * Distance::from(Weight::MAX)).to_string();
        assert_eq!(value["query"]["distance"], serde_json::Value::String(expected));
    }

    #[test]
    fn test_query_text() {
        let normal = outcome("normal");
        assert_eq!(
            query_text(normal.request.as_ref().unwrap(), normal.query.as_ref().unwrap()),
            "Query: Shortest path from A to D\n\
             Shortest Path from A to D: A -> B -> C -> D\n\
             Distance: 4\n"
        );

        let unknown = outcome("unknown-vertex");
        assert_eq!(
            query_text(unknown.request.as_ref().unwrap(), unknown.query.as_ref().unwrap()),
            "Query: Shortest path from A to C\nError: Vertex C does not exist\n"
        );
    }

    #[test]
    fn test_edge_table_lists_both_directions() {
        let table = edge_table(&outcome("partially-connected").graph).to_string();
        assert!(table.contains("Source"));
        let rows = table
            .lines()
            .filter(|line| line.contains('A') && line.contains('B'))
            .count();
        assert_eq!(rows, 2);
    }
}
