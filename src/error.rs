//!Error types for the ordering engine.

use thiserror::Error;

///Result type alias using the crate's error.
pub type Result<T> = std::result::Result<T,OrderingError>;

///Errors raised before any ordering work starts.
///
///Strategies either return a full permutation or one of these; nothing is
///partially computed.
#[derive(Error,Debug)]
pub enum OrderingError{
    ///Invalid argument handed to a strategy or a config builder
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument{
        ///The argument name
        arg : &'static str,
        ///Why it was rejected
        reason : String
    },

    ///Configuration text could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    ///Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error)
}

impl OrderingError{
    pub fn invalid_argument(arg : &'static str,reason : impl Into<String>) -> Self{
        OrderingError::InvalidArgument { arg : arg, reason : reason.into() }
    }
}

///Fails with `InvalidArgument` unless the matrix is square.
pub fn require_square(nrows : usize,ncols : usize) -> Result<()>{
    if nrows != ncols{
        return Err(OrderingError::invalid_argument("matrix",
            format!("elimination ordering needs a square matrix, got {}x{}",nrows,ncols)));
    }
    Ok(())
}
