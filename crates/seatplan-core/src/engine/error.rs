use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Roster has {people} people but the grid only has {capacity} seats")]
    CapacityExceeded { people: usize, capacity: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
