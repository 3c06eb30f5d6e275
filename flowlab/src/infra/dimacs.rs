//! Reader of maximum flow instances in the [DIMACS] format.
//!
//! ```text
//! c comment
//! p max <vertices> <arcs>
//! n <id> s
//! n <id> t
//! a <from> <to> <capacity>
//! ```
//!
//! Vertex IDs are one-based. When the source or the sink designation is
//! missing, vertex `1` is the source and vertex `<vertices>` is the sink.
//!
//! [DIMACS]: http://lpsolve.sourceforge.net/5.5/DIMACS_maxf.htm

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::SplitWhitespace,
};

use thiserror::Error;

use crate::{
    core::{id::VertexId, EdgeSet, GraphAdd, VertexSet},
    storage::DiGraph,
};

use super::generate::Instance;

// Counts on the problem line are not trusted beyond these.
const MAX_VERTICES: usize = u32::MAX as usize;
const MAX_RESERVED: usize = 1 << 20;

#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("reading the instance failed")]
    Io(#[from] io::Error),

    #[error("line {line}: unknown line type `{descriptor}`")]
    UnknownDescriptor { line: usize, descriptor: String },

    #[error("line {line}: malformed {kind} line")]
    Malformed { line: usize, kind: &'static str },

    #[error("line {line}: problem line must come before any node or arc line")]
    ProblemNotFirst { line: usize },

    #[error("line {line}: duplicate problem line")]
    DuplicateProblem { line: usize },

    #[error("line {line}: only `max` problems are supported, found `{problem}`")]
    UnsupportedProblem { line: usize, problem: String },

    #[error("line {line}: {vertex_count} vertices are more than supported")]
    TooManyVertices { line: usize, vertex_count: usize },

    #[error("line {line}: vertex {vertex} is out of range 1..={vertex_count}")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("missing problem line")]
    MissingProblem,

    #[error("expected {expected} arcs, found {found}")]
    ArcCountMismatch { expected: usize, found: usize },
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Instance<u64>, DimacsError> {
    let file = File::open(path)?;
    read(BufReader::new(file))
}

pub fn parse(input: &str) -> Result<Instance<u64>, DimacsError> {
    read(input.as_bytes())
}

pub fn read<R: BufRead>(reader: R) -> Result<Instance<u64>, DimacsError> {
    let mut graph: Option<DiGraph<(), u64>> = None;
    let mut expected_arcs = 0;
    let mut source = None;
    let mut sink = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let mut tokens = line.split_whitespace();

        let Some(descriptor) = tokens.next() else {
            continue;
        };

        match descriptor {
            "c" => {}
            "p" => {
                if graph.is_some() {
                    return Err(DimacsError::DuplicateProblem { line: line_no });
                }

                let problem = tokens.next().ok_or(DimacsError::Malformed {
                    line: line_no,
                    kind: "problem",
                })?;

                if problem != "max" {
                    return Err(DimacsError::UnsupportedProblem {
                        line: line_no,
                        problem: problem.to_owned(),
                    });
                }

                let vertex_count = number(&mut tokens, line_no, "problem")?;
                expected_arcs = number(&mut tokens, line_no, "problem")?;
                ensure_end(&mut tokens, line_no, "problem")?;

                if vertex_count > MAX_VERTICES {
                    return Err(DimacsError::TooManyVertices {
                        line: line_no,
                        vertex_count,
                    });
                }

                let mut new = DiGraph::with_capacity(
                    vertex_count.min(MAX_RESERVED),
                    expected_arcs.min(MAX_RESERVED),
                );
                for _ in 0..vertex_count {
                    new.add_vertex(());
                }
                graph = Some(new);
            }
            "n" => {
                let graph = graph
                    .as_ref()
                    .ok_or(DimacsError::ProblemNotFirst { line: line_no })?;

                let vertex = vertex(&mut tokens, graph, line_no, "node")?;
                let designation = tokens.next();
                ensure_end(&mut tokens, line_no, "node")?;

                match designation {
                    Some("s") => source = Some(vertex),
                    Some("t") => sink = Some(vertex),
                    _ => {
                        return Err(DimacsError::Malformed {
                            line: line_no,
                            kind: "node",
                        })
                    }
                }
            }
            "a" => {
                let graph = graph
                    .as_mut()
                    .ok_or(DimacsError::ProblemNotFirst { line: line_no })?;

                let from = vertex(&mut tokens, graph, line_no, "arc")?;
                let to = vertex(&mut tokens, graph, line_no, "arc")?;
                let capacity = number(&mut tokens, line_no, "arc")?;
                ensure_end(&mut tokens, line_no, "arc")?;

                graph.add_edge(&from, &to, capacity);
            }
            other => {
                return Err(DimacsError::UnknownDescriptor {
                    line: line_no,
                    descriptor: other.to_owned(),
                })
            }
        }
    }

    let graph = graph.ok_or(DimacsError::MissingProblem)?;

    let found = graph.edge_count();
    if found != expected_arcs {
        return Err(DimacsError::ArcCountMismatch {
            expected: expected_arcs,
            found,
        });
    }

    let last = graph.vertex_count().saturating_sub(1);

    Ok(Instance {
        source: source.unwrap_or_else(|| VertexId::from(0usize)),
        sink: sink.unwrap_or_else(|| VertexId::from(last)),
        graph,
    })
}

fn number<T: std::str::FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    line: usize,
    kind: &'static str,
) -> Result<T, DimacsError> {
    tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or(DimacsError::Malformed { line, kind })
}

fn vertex(
    tokens: &mut SplitWhitespace<'_>,
    graph: &DiGraph<(), u64>,
    line: usize,
    kind: &'static str,
) -> Result<VertexId, DimacsError> {
    let vertex: usize = number(tokens, line, kind)?;
    let vertex_count = graph.vertex_count();

    if vertex == 0 || vertex > vertex_count {
        return Err(DimacsError::VertexOutOfRange {
            line,
            vertex,
            vertex_count,
        });
    }

    Ok(VertexId::from(vertex - 1))
}

fn ensure_end(
    tokens: &mut SplitWhitespace<'_>,
    line: usize,
    kind: &'static str,
) -> Result<(), DimacsError> {
    match tokens.next() {
        Some(_) => Err(DimacsError::Malformed { line, kind }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::GraphRef;

    use super::*;

    const EXAMPLE: &str = "\
c Example from the format description
p max 6 8
n 1 s
n 6 t
a 1 2 5
a 1 3 15
a 2 4 5
a 2 5 5
a 3 4 5
a 3 5 5
a 4 6 15
a 5 6 5
";

    #[test]
    fn parse_example() {
        let instance = parse(EXAMPLE).unwrap();

        assert_eq!(instance.graph.vertex_count(), 6);
        assert_eq!(instance.graph.edge_count(), 8);
        assert_eq!(instance.source, VertexId::from(0usize));
        assert_eq!(instance.sink, VertexId::from(5usize));

        let first = instance.graph.edges().next().unwrap();
        assert_eq!(first.from, VertexId::from(0usize));
        assert_eq!(first.to, VertexId::from(1usize));
        assert_eq!(*first.attr, 5);
    }

    #[test]
    fn default_terminals() {
        let instance = parse("p max 3 1\n\na 1 3 4\n").unwrap();

        assert_eq!(instance.source, VertexId::from(0usize));
        assert_eq!(instance.sink, VertexId::from(2usize));
    }

    #[test]
    fn malformed_lines() {
        assert_matches!(
            parse("p max 2 1\na 1 2\n"),
            Err(DimacsError::Malformed { line: 2, kind: "arc" })
        );
        assert_matches!(
            parse("p max 2 1\na 1 2 x\n"),
            Err(DimacsError::Malformed { line: 2, kind: "arc" })
        );
        assert_matches!(
            parse("p max 2 0\nn 1 x\n"),
            Err(DimacsError::Malformed { line: 2, kind: "node" })
        );
        assert_matches!(
            parse("p max 2 1\nx 1 2\n"),
            Err(DimacsError::UnknownDescriptor { line: 2, .. })
        );
    }

    #[test]
    fn structural_errors() {
        assert_matches!(
            parse("a 1 2 3\n"),
            Err(DimacsError::ProblemNotFirst { line: 1 })
        );
        assert_matches!(
            parse("p max 2 0\np max 2 0\n"),
            Err(DimacsError::DuplicateProblem { line: 2 })
        );
        assert_matches!(
            parse("p min 2 0\n"),
            Err(DimacsError::UnsupportedProblem { line: 1, .. })
        );
        assert_matches!(
            parse("p max 2 1\na 1 3 1\n"),
            Err(DimacsError::VertexOutOfRange {
                line: 2,
                vertex: 3,
                vertex_count: 2
            })
        );
        assert_matches!(parse("c nothing\n"), Err(DimacsError::MissingProblem));
        assert_matches!(
            parse("p max 3 18446744073709551615\n"),
            Err(DimacsError::ArcCountMismatch {
                expected: usize::MAX,
                found: 0
            })
        );
        assert_matches!(
            parse("p max 18446744073709551615 0\n"),
            Err(DimacsError::TooManyVertices { line: 1, .. })
        );
        assert_matches!(
            parse("p max 2 2\na 1 2 1\n"),
            Err(DimacsError::ArcCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
