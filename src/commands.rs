use std::{
    fs::File,
    io::{self, BufRead, BufWriter, Write},
};

use anyhow::{Context, bail};
use rand::{SeedableRng, rngs::StdRng};

use astar_matrix::{
    AStar, AdjacencyMatrix, Config, HeuristicKind, ManhattanHeuristic, NodePositions,
    OccupancyGrid, PathResult, ZeroHeuristic, load_matrix, shortest_path_dijkstra,
};

use crate::cli::{Algorithm, Cli, Command, GenerateArgs, GridArgs, OutputFormat, SearchArgs};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Search(args) => search(args, config),
        Command::Grid(args) => grid(args),
        Command::Generate(args) => generate(args),
        Command::Config => show_config(&config, &mut io::stdout()),
    }
}

fn show_config<W: Write>(config: &Config, output: &mut W) -> anyhow::Result<()> {
    output.write_all(config.to_toml_string()?.as_bytes())?;
    Ok(())
}

fn search(args: SearchArgs, mut config: Config) -> anyhow::Result<()> {
    // command line flags win over the config file
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(node_count) = args.node_count {
        config.node_count = node_count;
    }
    if let Some(heuristic) = args.heuristic {
        config.heuristic = heuristic.into();
    }
    if args.positions.is_some() {
        config.positions = args.positions;
    }

    let graph = load_matrix(&config.input, config.node_count)?;
    let last = config.node_count - 1;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let start = match args.start {
        Some(start) => start,
        None => prompt_node(&mut input, &mut stdout, &format!("Enter start node (0-{last}): "))?,
    };
    let goal = match args.goal {
        Some(goal) => goal,
        None => prompt_node(&mut input, &mut stdout, &format!("Enter goal node (0-{last}): "))?,
    };

    let result = match args.algorithm {
        Algorithm::Dijkstra => shortest_path_dijkstra(&graph, start, goal)?,
        Algorithm::AStar => run_a_star(&graph, &config, start, goal)?,
    };

    render(&mut stdout, &result, start, goal, args.format)
}

fn run_a_star(graph: &AdjacencyMatrix, config: &Config, start: usize, goal: usize) -> anyhow::Result<PathResult> {
    let a_star = AStar::new();
    let result = match config.heuristic {
        HeuristicKind::Zero => a_star.search(graph, &ZeroHeuristic, start, goal)?,
        HeuristicKind::Manhattan => {
            let positions = match &config.positions {
                Some(path) => NodePositions::load(path, config.node_count)?,
                None => NodePositions::grid_layout(config.node_count)?,
            };
            positions.check_covers(graph.node_count())?;
            a_star.search(graph, &ManhattanHeuristic::new(positions), start, goal)?
        }
    };
    Ok(result)
}

fn grid(args: GridArgs) -> anyhow::Result<()> {
    let grid = OccupancyGrid::load(&args.input)?;
    let (graph, positions) = grid.to_graph()?;

    let cell_node = |(row, col): (usize, usize)| {
        grid.node(row, col)
            .with_context(|| format!("cell {row},{col} is outside the {}x{} grid", grid.height(), grid.width()))
    };
    let start = cell_node(args.start)?;
    let goal = cell_node(args.goal)?;

    let result = AStar::new().search(&graph, &ManhattanHeuristic::new(positions), start, goal)?;
    render(&mut io::stdout(), &result, start, goal, args.format)
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let graph = AdjacencyMatrix::random(args.node_count, args.density, args.max_weight, &mut rng)?;

    let file = File::create(&args.output)
        .with_context(|| format!("could not create {}", args.output.display()))?;
    graph.write_to(BufWriter::new(file))?;

    tracing::info!(
        path = %args.output.display(),
        node_count = args.node_count,
        edges = graph.edge_count(),
        "wrote adjacency matrix"
    );
    Ok(())
}

/// Ask for a node id on `output` and read it from the next line of `input`
fn prompt_node<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> anyhow::Result<usize> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no node given on standard input");
    }
    let value = line.trim();
    value
        .parse()
        .with_context(|| format!("expected a node number, got {value:?}"))
}

/// Print a result as text (`Path: a -> b`, `Cost: n`) or JSON
fn render<W: Write>(output: &mut W, result: &PathResult, start: usize, goal: usize, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, result)?;
            writeln!(output)?;
        }
        OutputFormat::Text => match result {
            PathResult::Found { path, cost } => {
                let nodes: Vec<String> = path.iter().map(ToString::to_string).collect();
                writeln!(output, "Path: {}", nodes.join(" -> "))?;
                writeln!(output, "Cost: {cost}")?;
            }
            PathResult::NotFound => {
                writeln!(output, "No path found from {start} to {goal}")?;
            }
        },
    }
    Ok(())
}
