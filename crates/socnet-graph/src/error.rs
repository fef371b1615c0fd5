use crate::node::NodeId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("node with id {id} already exists")]
    DuplicateNode { id: NodeId },

    #[error("no unused node id is left above {from}")]
    IdSpaceExhausted { from: NodeId },

    #[error("invalid record: {message}")]
    InvalidRecord { message: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
