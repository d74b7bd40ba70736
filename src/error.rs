use thiserror::Error;

/// Recoverable failures reported by graph algorithms.
///
/// Structural misuse (self-loops, out-of-range indices) is a programming
/// error and panics instead of surfacing here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// The graph has at least one cycle, so no topological order exists.
    #[error("graph contains a cycle: ordered {ordered} of {vertices} vertices")]
    Cyclic { ordered: usize, vertices: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_error_message_names_counts() {
        let err = GraphError::Cyclic {
            ordered: 2,
            vertices: 5,
        };
        assert_eq!(
            err.to_string(),
            "graph contains a cycle: ordered 2 of 5 vertices"
        );
    }
}
