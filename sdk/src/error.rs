use anchor_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("failed to load wallet keypair from {0}")]
    WalletUnreadable(String),

    #[error("no program named {0} is registered in the workspace")]
    UnknownProgram(String),

    #[error("invalid program id in {var}: {value}")]
    InvalidProgramId { var: String, value: String },

    #[error("program {0} is not deployed on this cluster")]
    ProgramNotDeployed(String),

    #[error("account {0} exists but is not executable")]
    NotExecutable(String),

    #[error("anchor client error: {0}")]
    AnchorClient(Box<ClientError>),

    #[error("rpc error: {0}")]
    Rpc(Box<solana_client::client_error::ClientError>),
}

impl From<ClientError> for SdkError {
    fn from(err: ClientError) -> Self {
        Self::AnchorClient(Box::new(err))
    }
}

impl From<solana_client::client_error::ClientError> for SdkError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        Self::Rpc(Box::new(err))
    }
}
