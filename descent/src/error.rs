use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Error reading test file {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
