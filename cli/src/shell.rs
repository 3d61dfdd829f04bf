//! Interactive shell over a single in-memory graph

use crate::{edge_table, OutputFormat};
use anyhow::{bail, Context, Result};
use labelgraph::{Graph, GraphDisplay, PathDisplay, Weight};
use std::io::BufRead;

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    AddVertex(String),
    RemoveVertex(String),
    AddEdge(String, String, Weight),
    RemoveEdge(String, String),
    Path(String, String),
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            [":quit" | ":exit" | ":q"] => ShellCommand::Quit,
            [":help" | ":h"] => ShellCommand::Help,
            ["show"] => ShellCommand::Show,
            ["add-vertex", label] => ShellCommand::AddVertex(label.to_string()),
            ["remove-vertex", label] => ShellCommand::RemoveVertex(label.to_string()),
            ["add-edge", a, b, weight] => {
                let weight: Weight = weight
                    .parse()
                    .with_context(|| format!("invalid weight {:?}", weight))?;
                ShellCommand::AddEdge(a.to_string(), b.to_string(), weight)
            }
            ["remove-edge", a, b] => ShellCommand::RemoveEdge(a.to_string(), b.to_string()),
            ["path", a, b] => ShellCommand::Path(a.to_string(), b.to_string()),
            _ => bail!("unknown command: {} (try :help)", line),
        };
        Ok(command)
    }
}

/// Apply a command, returning the text to print
fn execute(graph: &mut Graph, command: ShellCommand, format: OutputFormat) -> Result<String> {
    let output = match command {
        ShellCommand::AddVertex(label) => {
            graph.add_vertex(label.as_str())?;
            format!("Added vertex {}", label)
        }
        ShellCommand::RemoveVertex(label) => {
            if graph.remove_vertex(&label) {
                format!("Removed vertex {}", label)
            } else {
                format!("No vertex {}", label)
            }
        }
        ShellCommand::AddEdge(a, b, weight) => {
            graph.add_edge(&a, &b, weight)?;
            format!("Added edge {} - {} (Weight: {})", a, b, weight)
        }
        ShellCommand::RemoveEdge(a, b) => {
            graph.remove_edge(&a, &b)?;
            format!("Removed edge {} - {}", a, b)
        }
        ShellCommand::Path(a, b) => {
            let result = graph.shortest_path(&a, &b)?;
            match format {
                OutputFormat::Json => serde_json::to_string_pretty(&result)?,
                _ => PathDisplay(&result).to_string().trim_end().to_string(),
            }
        }
        ShellCommand::Show => match format {
            OutputFormat::Table => edge_table(graph).to_string(),
            _ => GraphDisplay(graph).to_string().trim_end().to_string(),
        },
        ShellCommand::Help => [
            "Commands:",
            "  add-vertex <label>",
            "  remove-vertex <label>",
            "  add-edge <label> <label> <weight>",
            "  remove-edge <label> <label>",
            "  path <from> <to>",
            "  show",
            "  :quit",
        ]
        .join("\n"),
        ShellCommand::Quit => String::new(),
    };
    Ok(output)
}

pub(crate) fn run_shell(format: OutputFormat) -> Result<()> {
    println!("Labelgraph Interactive Shell");
    println!("Type :help for commands. :quit to exit.\n");

    let mut graph = Graph::new();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        eprint!("labelgraph> ");

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = match ShellCommand::parse(trimmed) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }

        match execute(&mut graph, command, format) {
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("Error: {:#}", e),
        }
    }

    println!("Bye!");
    Ok(())
}
