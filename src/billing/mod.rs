use thiserror::Error;

pub mod import;
pub mod normalize;
pub mod record;


#[derive(Debug, PartialEq, Error)]
pub enum RowError {
    #[error("Name and Due Date are required")]
    MissingRequired,
    #[error("could not parse amount {raw:?}: {source}")]
    InvalidAmount {
        raw: String,
        source: std::num::ParseFloatError,
    },
}
