use {std::num::ParseIntError, thiserror::Error};

/// An error returned when accessing or mutating a [`DiGraph`](crate::DiGraph) arc.
///
/// The graph is never modified when one of these is returned.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ArcError {
    /// The source node index is out of range.
    #[error("source node index is invalid")]
    InvalidSource,
    /// The destination node index is out of range.
    #[error("destination node index is invalid")]
    InvalidDestination,
    /// An arc between the two nodes already exists.
    #[error("an arc between the two nodes already exists")]
    AlreadyExists,
    /// An arc between the two nodes does not exist.
    #[error("an arc between the two nodes does not exist")]
    DoesNotExist,
}

/// An error returned when loading a graph from its textual form.
#[derive(Debug, Error)]
pub enum GraphFileError {
    #[error("failed to access graph file")]
    Io(#[from] std::io::Error),
    /// The input has no `<nodeCount> <arcCount>` header line.
    #[error("missing `<nodeCount> <arcCount>` header")]
    MissingHeader,
    /// The graph representation cannot hold the declared number of nodes.
    #[error("{node_count} nodes do not fit the graph representation")]
    TooManyNodes { node_count: usize },
    /// A line ended before all of its expected tokens.
    #[error("line {line}: expected {expected} integers")]
    MissingToken { line: usize, expected: usize },
    /// A token is not an integer (or a count is negative).
    #[error("line {line}: `{token}` is not a valid integer")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// An error returned when loading a prerequisite list.
#[derive(Debug, Error)]
pub enum PrerequisiteError {
    #[error("failed to access prerequisite file")]
    Io(#[from] std::io::Error),
    /// The input ended before the declared number of labels or records.
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEnd(&'static str),
    /// A count is not a non-negative integer.
    #[error("line {line}: `{token}` is not a valid count")]
    InvalidCount {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// The same label was declared twice.
    #[error("line {line}: duplicate label `{label}`")]
    DuplicateLabel { line: usize, label: String },
    /// A record refers to a label that was never declared.
    #[error("line {line}: unknown label `{label}`")]
    UnknownLabel { line: usize, label: String },
    /// A record lists fewer predecessors than its count says.
    #[error("line {line}: expected {expected} predecessors, found {found}")]
    MissingPredecessors {
        line: usize,
        expected: usize,
        found: usize,
    },
}
