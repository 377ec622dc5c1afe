use thiserror::Error;

pub type EfResult<T> = Result<T, EfError>;

#[derive(Error, Debug)]
pub enum EfError {
    #[error("Unknown compartment: {name}")]
    UnknownCompartment { name: String },
}
