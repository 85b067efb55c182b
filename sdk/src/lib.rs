//! Stakefarm SDK - client-side access to the staking farm program
//!
//! Thin wrappers for:
//! - Provider construction from the process environment
//! - Workspace registry lookups (program name -> deployed program id)
//! - Submitting the program's `initialize` call and returning its signature

pub mod client;
pub mod error;
pub mod provider;
pub mod workspace;

pub use client::FarmClient;
pub use error::SdkError;
pub use provider::Provider;
pub use workspace::Workspace;

// Re-export commonly used types
pub use anchor_client::{Client, Cluster};
pub use solana_sdk::{
    signature::{Keypair, Signature},
    signer::Signer,
};

pub type Result<T> = std::result::Result<T, error::SdkError>;
