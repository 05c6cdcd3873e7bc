//! The textual graph format.
//!
//! ```text
//! <nodeCount> <arcCount>
//! <src> <dst>
//! <src> <dst>
//! ...
//! ```
//!
//! Tokens are whitespace-separated integers; node indices are zero-based.
//! Exactly `arcCount` arc lines are read: any lines after them are ignored and a shorter
//! input ends the load early. A blank arc line is malformed.
//! Arc lines with out-of-range node indices and repeated arcs are skipped,
//! the loaded graph's [`arc_count`](DiGraph::arc_count) is the number of arcs actually added.
//! Costs are not part of the format.

use {
    crate::*,
    std::{
        fmt::Formatter,
        fs, io,
        num::ParseIntError,
        path::Path,
        str::FromStr,
    },
};

/// Writes `graph` in the textual format, arcs in [`arcs`](DiGraph::arcs) order.
///
/// Used by the [`Display`](std::fmt::Display) implementations of the graphs.
pub fn fmt_graph<G: DiGraph>(graph: &G, f: &mut Formatter) -> std::fmt::Result {
    writeln!(f, "{} {}", graph.node_count(), graph.arc_count())?;

    for arc in graph.arcs() {
        writeln!(f, "{} {}", arc.source(), arc.destination())?;
    }

    Ok(())
}

/// Writes `graph` in the textual format to the file at `path`.
pub fn write_graph<G: DiGraph>(graph: &G, path: impl AsRef<Path>) -> io::Result<()> {
    fs::write(path, graph.to_string())
}

/// Loads a graph from the file at `path`.
pub fn read_graph<G: DiGraph>(path: impl AsRef<Path>) -> Result<G, GraphFileError> {
    let text = fs::read_to_string(path)?;
    parse_graph(&text)
}

/// Returns the `<nodeCount> <arcCount>` header of the textual format.
pub fn parse_header(text: &str) -> Result<(usize, usize), GraphFileError> {
    let line = text.lines().next().ok_or(GraphFileError::MissingHeader)?;

    parse_pair(1, line)
}

/// Parses a graph in the textual format.
pub fn parse_graph<G: DiGraph>(text: &str) -> Result<G, GraphFileError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(GraphFileError::MissingHeader)?;
    let (node_count, declared_arcs) = parse_pair::<usize>(1, header)?;

    let mut graph =
        G::try_with_nodes(node_count).ok_or(GraphFileError::TooManyNodes { node_count })?;

    for (index, line) in lines.take(declared_arcs).enumerate() {
        let line_number = index + 2;

        // Parsed as signed: negative indices are out of range, not malformed.
        let (src, dst) = parse_pair::<i64>(line_number, line)?;

        let (src, dst) = match (usize::try_from(src), usize::try_from(dst)) {
            (Ok(src), Ok(dst)) => (src, dst),
            _ => {
                log::debug!("line {}: arc {} -> {} out of range, skipped", line_number, src, dst);
                continue;
            }
        };

        if let Err(err) = graph.add_arc(src, dst) {
            log::debug!("line {}: arc {} -> {} skipped: {}", line_number, src, dst, err);
        }
    }

    if graph.arc_count() != declared_arcs {
        log::debug!(
            "declared {} arcs, loaded {}",
            declared_arcs,
            graph.arc_count()
        );
    }

    Ok(graph)
}

/// Parses the first two whitespace-separated integers of `line`; the rest of the line is ignored.
fn parse_pair<T>(line_number: usize, line: &str) -> Result<(T, T), GraphFileError>
where
    T: FromStr<Err = ParseIntError>,
{
    let mut tokens = line.split_whitespace();

    let mut next = || -> Result<T, GraphFileError> {
        let token = tokens.next().ok_or(GraphFileError::MissingToken {
            line: line_number,
            expected: 2,
        })?;

        token
            .parse()
            .map_err(|source| GraphFileError::InvalidNumber {
                line: line_number,
                token: token.to_owned(),
                source,
            })
    };

    let first = next()?;
    let second = next()?;

    Ok((first, second))
}
