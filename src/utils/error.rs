use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("node #{0:02} is not in the network")]
    UnknownNode(usize),
    #[error("edge ({0}, {0}) is a self loop")]
    SelfLoop(usize),
    #[error("edge ({0}, {1}) is inserted twice")]
    DuplicateEdge(usize, usize),
    #[error("network declares {0} nodes but lists attributes for {1}")]
    NodeCountMismatch(usize, usize),
    #[error("source and target are both node #{0:02}")]
    SameEndpoints(usize),
    #[error("node #{1:02} is unreachable from node #{0:02}")]
    Unreachable(usize, usize),
    #[error("unknown routing algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("parameter `{0}` has invalid value {1}")]
    InvalidParameter(&'static str, f64),
}
