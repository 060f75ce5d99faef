use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use gw_anim::{Highlight, Renderer, Step};
use gw_app::{AppResult, LoadedGraph, load_graph, playback_service, query};

#[derive(Parser)]
#[command(name = "gw-cli")]
#[command(about = "graphwalk CLI - BFS/DFS over small graphs, with step-by-step playback", long_about = None)]
struct Cli {
    /// Graph project file (YAML or JSON); defaults to the built-in sample graph
    #[arg(short, long, global = true)]
    graph: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the nodes of the graph
    Nodes,
    /// Run breadth-first search and print order, distances and parents
    Bfs {
        /// Start node id
        start: String,
    },
    /// Run depth-first search and print order and parents
    Dfs {
        /// Start node id
        start: String,
    },
    /// Print the adjacency list and adjacency matrix
    Repr,
    /// Print the BFS step sequence
    Steps {
        /// Start node id
        start: String,
        /// One JSON object per line instead of text
        #[arg(long)]
        json: bool,
    },
    /// Animate BFS in the terminal
    Play {
        /// Start node id (defaults to the project's start, then the first node)
        start: Option<String>,
        /// Delay between steps in milliseconds (overrides the project file)
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Stop after this many steps
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let loaded = load_graph(cli.graph.as_deref())?;
    debug!(
        name = %loaded.summary().name,
        nodes = loaded.graph.node_count(),
        "graph ready"
    );

    match cli.command {
        Commands::Nodes => cmd_nodes(&loaded, cli.graph.as_deref()),
        Commands::Bfs { start } => cmd_bfs(&loaded, &start),
        Commands::Dfs { start } => cmd_dfs(&loaded, &start),
        Commands::Repr => cmd_repr(&loaded),
        Commands::Steps { start, json } => cmd_steps(&loaded, &start, json),
        Commands::Play {
            start,
            interval_ms,
            limit,
        } => cmd_play(&loaded, start.as_deref(), interval_ms, limit),
    }
}

fn cmd_nodes(loaded: &LoadedGraph, source: Option<&Path>) -> AppResult<()> {
    let summary = loaded.summary();
    match source {
        Some(path) => println!("Graph '{}' ({})", summary.name, path.display()),
        None => println!("Graph '{}' (built-in)", summary.name),
    }
    println!(
        "  {}, {} nodes, {} edges",
        if summary.directed {
            "directed"
        } else {
            "undirected"
        },
        summary.node_count,
        summary.edge_count
    );
    for id in loaded.graph.nodes() {
        println!("  {} -> {}", id, loaded.graph.neighbors(id).join(", "));
    }
    Ok(())
}

fn cmd_bfs(loaded: &LoadedGraph, start: &str) -> AppResult<()> {
    debug!(start, "bfs");
    let result = query::run_bfs(&loaded.graph, start)?;
    print!("{}", query::bfs_report(start, &result));
    Ok(())
}

fn cmd_dfs(loaded: &LoadedGraph, start: &str) -> AppResult<()> {
    debug!(start, "dfs");
    let result = query::run_dfs(&loaded.graph, start)?;
    print!("{}", query::dfs_report(start, &result));
    Ok(())
}

fn cmd_repr(loaded: &LoadedGraph) -> AppResult<()> {
    println!("Adjacency list:");
    println!("{}", query::adjacency_list_json(&loaded.graph)?);
    println!("\nAdjacency matrix:");
    println!("{}", query::adjacency_matrix_text(&loaded.graph));
    Ok(())
}

fn cmd_steps(loaded: &LoadedGraph, start: &str, json: bool) -> AppResult<()> {
    let player = playback_service::prepare_player(&loaded.graph, start)?;
    debug!(start, steps = player.steps().len(), json, "listing steps");
    if json {
        for line in playback_service::steps_as_json(player.steps())? {
            println!("{}", line);
        }
    } else {
        for (i, step) in player.steps().iter().enumerate() {
            println!("{:>3}  {}", i, describe(step));
        }
    }
    Ok(())
}

fn cmd_play(
    loaded: &LoadedGraph,
    start: Option<&str>,
    interval_ms: Option<u64>,
    limit: Option<usize>,
) -> AppResult<()> {
    let start = playback_service::resolve_start(loaded, start)?;
    let period = interval_ms
        .map(Duration::from_millis)
        .unwrap_or(loaded.playback.interval);
    debug!(start = %start, period_ms = period.as_millis() as u64, ?limit, "play");

    println!(
        "BFS playback from {} ({} ms per step)",
        start,
        period.as_millis()
    );
    let mut player = playback_service::prepare_player(&loaded.graph, &start)?;
    let mut renderer = ConsoleRenderer::default();
    let rendered = playback_service::play(&mut player, &mut renderer, period, limit);

    if player.is_finished() {
        println!("✓ Playback finished ({} steps)", rendered);
    } else {
        println!(
            "Paused at step {}/{} ({} remaining)",
            player.index(),
            player.steps().len(),
            player.remaining()
        );
    }
    Ok(())
}

fn describe(step: &Step) -> String {
    let head = match step.edge() {
        Some((from, to)) => format!("{:<8} {} -> {}", step.kind(), from, to),
        None => match step.node() {
            Some(node) => format!("{:<8} {}", step.kind(), node),
            None => step.kind().to_string(),
        },
    };
    format!("{:<24} queue: [{}]", head, step.queue().join(" <- "))
}

/// Terminal renderer: one line per step plus the highlights it implies.
#[derive(Default)]
struct ConsoleRenderer {
    shown: usize,
}

impl Renderer for ConsoleRenderer {
    fn on_step(&mut self, step: &Step) {
        let log = serde_json::to_string(step).unwrap_or_else(|_| describe(step));
        println!("[{:>3}] {}", self.shown, log);
        for highlight in step.highlights() {
            match highlight {
                Highlight::Node { id, role } => println!("       node {} is {:?}", id, role),
                Highlight::Edge { from, to, role } => {
                    println!("       edge {}-{} is {:?}", from, to, role)
                }
            }
        }
        if !matches!(step, Step::End) {
            println!("       queue: {}", step.queue().join(" <- "));
        }
        self.shown += 1;
    }

    fn on_reset(&mut self) {
        self.shown = 0;
    }
}
