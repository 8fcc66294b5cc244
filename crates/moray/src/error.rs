pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Router kind already registered: {kind}")]
    DuplicateRouter { kind: &'static str },

    #[error("Default router kind is not registered: {kind}")]
    UnknownDefaultRouter { kind: &'static str },
}
