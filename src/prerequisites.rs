//! Labelled dependency lists, e.g. course prerequisites.
//!
//! Input:
//!
//! ```text
//! <nodeCount>
//! <label>            (nodeCount lines)
//! <recordCount>
//! <label> <predecessorCount> <predecessorLabel>...   (recordCount lines)
//! ```
//!
//! Every record adds the arcs `predecessor -> label`.
//! Output, one line per label in input order, predecessor labels sorted:
//!
//! ```text
//! <label> <immediatePredecessorCount> <predecessorLabel>...
//! ```

use {
    crate::*,
    std::{
        collections::HashMap,
        fmt::{Display, Formatter},
        fs, io,
        path::Path,
    },
};

/// A parsed prerequisite list: node labels and `predecessor -> node` arcs between them.
#[derive(Clone, Debug, Default)]
pub struct PrerequisiteList {
    labels: Vec<String>,
    indices: HashMap<String, NodeIndex>,
    arcs: Vec<(NodeIndex, NodeIndex)>,
}

/// Line iterator which skips blank lines and remembers 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), PrerequisiteError> {
        self.inner
            .by_ref()
            .map(|(index, line)| (index + 1, line.trim()))
            .find(|(_, line)| !line.is_empty())
            .ok_or(PrerequisiteError::UnexpectedEnd(expected))
    }

    fn next_count(&mut self, expected: &'static str) -> Result<usize, PrerequisiteError> {
        let (line, text) = self.next_line(expected)?;
        parse_count(line, text)
    }
}

fn parse_count(line: usize, token: &str) -> Result<usize, PrerequisiteError> {
    token
        .parse()
        .map_err(|source| PrerequisiteError::InvalidCount {
            line,
            token: token.to_owned(),
            source,
        })
}

impl PrerequisiteList {
    /// Parses a prerequisite list. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, PrerequisiteError> {
        let mut lines = Lines::new(text);
        let mut list = Self::default();

        let node_count = lines.next_count("node count")?;

        for _ in 0..node_count {
            let (line, label) = lines.next_line("node label")?;

            if list.indices.contains_key(label) {
                return Err(PrerequisiteError::DuplicateLabel {
                    line,
                    label: label.to_owned(),
                });
            }

            list.indices.insert(label.to_owned(), list.labels.len());
            list.labels.push(label.to_owned());
        }

        let record_count = lines.next_count("record count")?;

        for _ in 0..record_count {
            let (line, record) = lines.next_line("prerequisite record")?;
            let mut tokens = record.split_whitespace();

            // Non-empty, checked by `next_line`.
            let node = tokens.next().unwrap_or_default();
            let node = list.index(line, node)?;

            let count = tokens
                .next()
                .ok_or(PrerequisiteError::MissingPredecessors {
                    line,
                    expected: 1,
                    found: 0,
                })
                .and_then(|token| parse_count(line, token))?;

            let predecessors: Vec<_> = tokens.take(count).collect();

            if predecessors.len() < count {
                return Err(PrerequisiteError::MissingPredecessors {
                    line,
                    expected: count,
                    found: predecessors.len(),
                });
            }

            for predecessor in predecessors {
                let predecessor = list.index(line, predecessor)?;
                list.arcs.push((predecessor, node));
            }
        }

        log::debug!(
            "prerequisite list: {} labels, {} arcs",
            list.labels.len(),
            list.arcs.len()
        );

        Ok(list)
    }

    /// Loads a prerequisite list from the file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, PrerequisiteError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    fn index(&self, line: usize, label: &str) -> Result<NodeIndex, PrerequisiteError> {
        self.index_of(label)
            .ok_or_else(|| PrerequisiteError::UnknownLabel {
                line,
                label: label.to_owned(),
            })
    }

    /// Returns the node labels, in input order (i.e. indexed by [`NodeIndex`]).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the node index of `label`, if it was declared.
    pub fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.indices.get(label).copied()
    }

    /// Returns the number of `predecessor -> node` arcs listed, repeats included.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Builds the `predecessor -> node` graph. Repeated prerequisites are added once.
    pub fn build<G: DiGraph>(&self) -> G {
        let mut graph = G::with_nodes(self.labels.len());

        for &(src, dst) in self.arcs.iter() {
            if let Err(err) = graph.add_arc(src, dst) {
                log::debug!(
                    "prerequisite `{}` of `{}` skipped: {}",
                    self.labels[src],
                    self.labels[dst],
                    err
                );
            }
        }

        graph
    }

    /// Computes the immediate prerequisites of every node, using the `G` graph representation.
    pub fn immediate<G: DiGraph>(&self) -> ImmediatePrerequisites<'_> {
        let graph: G = self.build();

        if graph.is_cyclic() {
            log::warn!("prerequisites are cyclic: mutually dependent nodes shadow each other");
        }

        let closure = graph.transitive_closure();

        ImmediatePrerequisites {
            list: self,
            predecessors: immediate_predecessors(&closure),
        }
    }
}

/// Immediate prerequisites of every node of a [`PrerequisiteList`].
///
/// [`Display`] renders the output format.
#[derive(Clone, Debug)]
pub struct ImmediatePrerequisites<'a> {
    list: &'a PrerequisiteList,
    predecessors: Vec<Vec<NodeIndex>>,
}

impl<'a> ImmediatePrerequisites<'a> {
    /// Returns the immediate prerequisite labels of node `node`, sorted.
    pub fn of(&self, node: NodeIndex) -> Option<Vec<&'a str>> {
        let labels = self.list.labels();

        self.predecessors.get(node).map(|predecessors| {
            let mut names: Vec<_> = predecessors
                .iter()
                .map(|&pred| labels[pred].as_str())
                .collect();
            names.sort_unstable();
            names
        })
    }

    /// Returns the immediate prerequisite labels of the node labelled `label`, sorted.
    pub fn of_label(&self, label: &str) -> Option<Vec<&'a str>> {
        self.of(self.list.index_of(label)?)
    }

    /// Writes the output format to the file at `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl Display for ImmediatePrerequisites<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for (node, label) in self.list.labels().iter().enumerate() {
            let predecessors = self.of(node).unwrap_or_default();

            write!(f, "{} {}", label, predecessors.len())?;

            for predecessor in predecessors {
                write!(f, " {}", predecessor)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
