use {
    anyhow::Context,
    clap::{Parser, ValueEnum},
    minidigraph::*,
    std::{fs, path::PathBuf},
};

/// minidigraph - transitive closure and immediate prerequisites of directed graphs
#[derive(Debug, Parser)]
#[command(name = "minidigraph", version, about, long_about = None)]
struct Cli {
    /// Input file: a graph, or a prerequisite list with `--prerequisites`.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file. Printed to stdout if omitted.
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Graph representation to compute with.
    #[arg(short, long, value_enum, default_value_t = RepresentationArg::Auto)]
    representation: RepresentationArg,

    /// Treat the input as a prerequisite list and write the immediate prerequisites of every node.
    #[arg(short, long)]
    prerequisites: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RepresentationArg {
    /// Adjacency matrix for graphs with more nodes than arcs, adjacency lists otherwise.
    Auto,
    List,
    Matrix,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("minidigraph", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read `{}`", cli.input.display()))?;

    let output = if cli.prerequisites {
        prerequisites(&text, cli.representation)?
    } else {
        closure(&text, cli.representation)?
    };

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write `{}`", path.display()))?,
        None => print!("{}", output),
    }

    Ok(())
}

/// Returns the closure of the graph in `text`, in the textual graph format.
fn closure(text: &str, representation: RepresentationArg) -> anyhow::Result<String> {
    let representation = match representation {
        RepresentationArg::Auto => {
            let (node_count, arc_count) =
                format::parse_header(text).context("invalid graph file")?;
            Representation::choose(node_count, arc_count)
        }
        RepresentationArg::List => Representation::List,
        RepresentationArg::Matrix => Representation::Matrix,
    };

    log::debug!("using the {:?} representation", representation);

    match representation {
        Representation::List => closure_with::<ListGraph>(text),
        Representation::Matrix => closure_with::<MatrixGraph>(text),
    }
}

fn closure_with<G: DiGraph>(text: &str) -> anyhow::Result<String> {
    let graph: G = format::parse_graph(text).context("invalid graph file")?;

    log::info!(
        "loaded {} nodes, {} arcs",
        graph.node_count(),
        graph.arc_count()
    );

    let closure = graph.transitive_closure();

    log::info!("closure has {} arcs", closure.arc_count());

    Ok(closure.to_string())
}

/// Returns the immediate prerequisites of every node of the prerequisite list in `text`.
fn prerequisites(text: &str, representation: RepresentationArg) -> anyhow::Result<String> {
    let list = PrerequisiteList::parse(text).context("invalid prerequisite list")?;

    let representation = match representation {
        RepresentationArg::Auto => Representation::choose(list.labels().len(), list.arc_count()),
        RepresentationArg::List => Representation::List,
        RepresentationArg::Matrix => Representation::Matrix,
    };

    log::debug!("using the {:?} representation", representation);

    let immediate = match representation {
        Representation::List => list.immediate::<ListGraph>(),
        Representation::Matrix => list.immediate::<MatrixGraph>(),
    };

    Ok(immediate.to_string())
}
