use thiserror::Error;

pub type Result<T> = std::result::Result<T, BurnrateError>;

#[derive(Error, Debug)]
pub enum BurnrateError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Environment error: {0}")]
    Environment(String),
    #[error("Clone error: {0}")]
    Clone(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Git repository error: {0}")]
    Repo(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    Decode(#[from] Box<gix::objs::decode::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for BurnrateError {
    fn from(err: gix::open::Error) -> Self {
        BurnrateError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for BurnrateError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        BurnrateError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for BurnrateError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        BurnrateError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for BurnrateError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        BurnrateError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for BurnrateError {
    fn from(err: gix::object::commit::Error) -> Self {
        BurnrateError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for BurnrateError {
    fn from(err: gix::objs::decode::Error) -> Self {
        BurnrateError::Decode(Box::new(err))
    }
}
