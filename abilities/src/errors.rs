use thiserror::Error;

use reachability::GraphError;

#[derive(Debug, Error)]
pub enum AbilityError {
    #[error("Unknown ability: {0}")]
    Unknown(String),

    #[error("Some abilities have the same id: {0}")]
    Duplicate(String),

    #[error("Ability {0} is already learned")]
    AlreadyLearned(String),

    #[error("Ability {0} is not learned")]
    NotLearned(String),

    #[error("Ability {id} costs {price}, but the score is only {score}")]
    InsufficientScore { id: String, price: u64, score: u64 },

    #[error("Ability {0} is not connected to any learned ability")]
    Unreachable(String),

    #[error("Ability {0} is the base ability and cannot be forgotten")]
    Base(String),

    #[error("Forgetting {0} would disconnect other learned abilities")]
    WouldDisconnect(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = ::std::result::Result<T, AbilityError>;
