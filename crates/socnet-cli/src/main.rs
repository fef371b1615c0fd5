mod export;
mod graph_io;

use graph_io::{InputFormat, OutputFormat};
use serde::Serialize;
use socnet_algo::{Algorithm, CentralityOptions};
use socnet_graph::{Graph, GraphError, GraphOptions, NodeId};
use socnet_layout::{AUTO_LAYOUT_ITERATIONS, ForceDirectedLayout, ForceDirectedOptions};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    Graph(GraphError),
    AlgorithmFailed(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Csv(err) => write!(f, "CSV error: {err}"),
            CliError::Graph(err) => write!(f, "graph error: {err}"),
            CliError::AlgorithmFailed(msg) => write!(f, "algorithm failed: {msg}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<csv::Error> for CliError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<GraphError> for CliError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Stats,
    Run,
    Layout,
    Convert,
    Sample,
}

#[derive(Debug)]
struct Args {
    command: Command,
    algorithm: Option<String>,
    input: Option<String>,
    format: Option<InputFormat>,
    to: OutputFormat,
    start: Option<NodeId>,
    end: Option<NodeId>,
    top_k: usize,
    iterations: usize,
    layout_config: Option<String>,
    keep_positions: bool,
    seed: u64,
    nodes: usize,
    probability: f64,
    pretty: bool,
    out: Option<String>,
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Stats,
            algorithm: None,
            input: None,
            format: None,
            to: OutputFormat::Json,
            start: None,
            end: None,
            top_k: CentralityOptions::default().top_k,
            iterations: AUTO_LAYOUT_ITERATIONS,
            layout_config: None,
            keep_positions: false,
            seed: GraphOptions::default().seed,
            nodes: 20,
            probability: 0.15,
            pretty: false,
            out: None,
            verbose: false,
        }
    }
}

#[derive(Serialize)]
struct StatsOut {
    #[serde(flatten)]
    statistics: socnet_graph::GraphStatistics,
    isolated_nodes: Vec<NodeId>,
}

fn usage() -> &'static str {
    "socnet\n\
\n\
USAGE:\n\
  socnet [stats] [--format json|csv] [--pretty] [--out <path>] [<path>|-]\n\
  socnet run <bfs|dfs|dijkstra|astar|components|centrality|coloring> [--start <id>] [--end <id>] [--top-k <k>] [--format json|csv] [--pretty] [--out <path>] [<path>|-]\n\
  socnet layout [--iterations <n>] [--layout-config <json-path>] [--seed <n>] [--keep-positions] [--to json|csv] [--out <path>] [<path>|-]\n\
  socnet convert --to json|csv|adjacency-list|adjacency-matrix [--format json|csv] [--pretty] [--out <path>] [<path>|-]\n\
  socnet sample [--nodes <n>] [--probability <p>] [--seed <n>] [--to json|csv|adjacency-list|adjacency-matrix] [--out <path>]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input format defaults to CSV for .csv paths and JSON otherwise.\n\
  - bfs/dfs need --start; dijkstra/astar need --start and --end.\n\
  - layout places nodes on a circle before simulating unless --keep-positions is given.\n\
  - Logging goes to stderr; set SOCNET_LOG (e.g. SOCNET_LOG=debug) or pass --verbose.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    fn value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
        it.next().ok_or(CliError::Usage(usage()))
    }
    fn number<'a, T: std::str::FromStr>(
        it: &mut impl Iterator<Item = &'a String>,
    ) -> Result<T, CliError> {
        value(it)?.parse::<T>().map_err(|_| CliError::Usage(usage()))
    }

    let mut args = Args::default();
    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "stats" => args.command = Command::Stats,
            "run" => args.command = Command::Run,
            "layout" => args.command = Command::Layout,
            "convert" => args.command = Command::Convert,
            "sample" => args.command = Command::Sample,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--keep-positions" => args.keep_positions = true,
            "--format" => {
                args.format = Some(
                    value(&mut it)?
                        .parse::<InputFormat>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--to" => {
                args.to = value(&mut it)?
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--start" => args.start = Some(number(&mut it)?),
            "--end" => args.end = Some(number(&mut it)?),
            "--top-k" => args.top_k = number(&mut it)?,
            "--iterations" => args.iterations = number(&mut it)?,
            "--seed" => args.seed = number(&mut it)?,
            "--nodes" => args.nodes = number(&mut it)?,
            "--probability" => {
                args.probability = number(&mut it)?;
                if !(0.0..=1.0).contains(&args.probability) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--layout-config" => args.layout_config = Some(value(&mut it)?.clone()),
            "--out" => args.out = Some(value(&mut it)?.clone()),
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            positional => {
                if args.command == Command::Run && args.algorithm.is_none() {
                    args.algorithm = Some(positional.to_string());
                } else if args.input.is_none() {
                    args.input = Some(positional.to_string());
                } else {
                    return Err(CliError::Usage(usage()));
                }
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_graph(args: &Args) -> Result<Graph, CliError> {
    let text = read_input(args.input.as_deref())?;
    let format = args
        .format
        .unwrap_or_else(|| InputFormat::from_path(args.input.as_deref()));
    graph_io::parse_graph(&text, format, GraphOptions { seed: args.seed })
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    write_text(&text, out)
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn build_algorithm(args: &Args) -> Result<Algorithm, CliError> {
    let Some(name) = args.algorithm.as_deref() else {
        return Err(CliError::Usage(usage()));
    };
    let start = || args.start.ok_or(CliError::Usage(usage()));
    let end = || args.end.ok_or(CliError::Usage(usage()));
    Ok(match name.to_ascii_lowercase().as_str() {
        "bfs" => Algorithm::Bfs { start: start()? },
        "dfs" => Algorithm::Dfs { start: start()? },
        "dijkstra" => Algorithm::Dijkstra {
            start: start()?,
            end: end()?,
        },
        "astar" | "a*" | "a-star" => Algorithm::AStar {
            start: start()?,
            end: end()?,
        },
        "components" => Algorithm::ConnectedComponents,
        "centrality" => Algorithm::DegreeCentrality(CentralityOptions { top_k: args.top_k }),
        "coloring" | "welsh-powell" => Algorithm::WelshPowell,
        _ => return Err(CliError::Usage(usage())),
    })
}

fn load_layout_options(path: Option<&str>) -> Result<ForceDirectedOptions, CliError> {
    match path {
        None => Ok(ForceDirectedOptions::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Stats => {
            let graph = load_graph(&args)?;
            let out = StatsOut {
                statistics: graph.statistics(),
                isolated_nodes: graph
                    .nodes()
                    .filter(|n| graph.degree(n.id()) == 0)
                    .map(|n| n.id())
                    .collect(),
            };
            write_json(&out, args.pretty, args.out.as_deref())
        }
        Command::Run => {
            let algorithm = build_algorithm(&args)?;
            let graph = load_graph(&args)?;
            let result = socnet_algo::run(&graph, &algorithm);
            write_json(&result, args.pretty, args.out.as_deref())?;
            if result.success {
                Ok(())
            } else {
                Err(CliError::AlgorithmFailed(result.message))
            }
        }
        Command::Layout => {
            let mut graph = load_graph(&args)?;
            let options = load_layout_options(args.layout_config.as_deref())?;
            let stats = if args.keep_positions {
                let mut engine = ForceDirectedLayout::new(options);
                let stats = engine.run(&mut graph, args.iterations);
                engine.reset(&mut graph);
                stats
            } else {
                socnet_layout::auto_layout(&mut graph, options, args.iterations, args.seed)
            };
            tracing::info!(
                iterations = args.iterations,
                temperature = stats.temperature,
                "layout complete"
            );
            let text = graph_io::render_graph(&graph, args.to, args.pretty)?;
            write_text(&text, args.out.as_deref())
        }
        Command::Convert => {
            let graph = load_graph(&args)?;
            let text = graph_io::render_graph(&graph, args.to, args.pretty)?;
            write_text(&text, args.out.as_deref())
        }
        Command::Sample => {
            let graph = socnet_graph::sample::generate(args.nodes, args.probability, args.seed);
            let text = graph_io::render_graph(&graph, args.to, args.pretty)?;
            write_text(&text, args.out.as_deref())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SOCNET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        match err {
            CliError::Usage(msg) => {
                eprintln!("{msg}");
                std::process::exit(2);
            }
            err => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}
