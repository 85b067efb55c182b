//! RPC client wrapper around the anchor client

use crate::{provider::Provider, workspace::Workspace, Result, SdkError};
use anchor_client::{Client, Program};
use sha2::{Digest, Sha256};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::rc::Rc;
use tracing::info;

/// Client for one provider context, holding the payer identity
pub struct FarmClient {
    pub client: Client<Rc<Keypair>>,
    pub payer: Rc<Keypair>,
}

impl FarmClient {
    /// Build a client at confirmed commitment from the provider's cluster
    /// and wallet
    pub fn new(provider: &Provider) -> Result<Self> {
        let payer = Rc::new(provider.keypair()?);
        let client = Client::new_with_options(
            provider.cluster.clone(),
            payer.clone(),
            CommitmentConfig::confirmed(),
        );
        Ok(Self { client, payer })
    }

    /// The payer's public key
    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Resolve a workspace program name to an anchor program handle
    pub fn program(&self, name: &str) -> Result<Program<Rc<Keypair>>> {
        let program_id = Workspace::resolve(name)?;
        Ok(self.client.program(program_id)?)
    }

    /// Preflight check: the target account must exist on this cluster and
    /// hold executable program data.
    ///
    /// Transport faults surface as [`SdkError::Rpc`] with the cause intact;
    /// only a reachable cluster with no account at the program id reports
    /// the program as not deployed.
    pub fn ensure_deployed(&self, program: &Program<Rc<Keypair>>) -> Result<()> {
        let account = program
            .rpc()
            .get_account_with_commitment(&program.id(), CommitmentConfig::confirmed())?
            .value
            .ok_or_else(|| SdkError::ProgramNotDeployed(program.id().to_string()))?;
        if !account.executable {
            return Err(SdkError::NotExecutable(program.id().to_string()));
        }
        Ok(())
    }

    /// Submit the program's `initialize` call and return its transaction
    /// signature.
    ///
    /// The instruction carries the eight discriminator bytes and nothing
    /// else; the payer is the sole signer and fee payer.
    pub fn initialize(&self, program: &Program<Rc<Keypair>>) -> Result<Signature> {
        let instruction = Instruction {
            program_id: program.id(),
            accounts: vec![],
            data: global_discriminator("initialize").to_vec(),
        };

        let rpc = program.rpc();
        let recent_blockhash = rpc.get_latest_blockhash()?;
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.payer.pubkey()),
            &[self.payer.as_ref()],
            recent_blockhash,
        );

        info!(program = %program.id(), "submitting initialize");
        let signature = rpc.send_and_confirm_transaction(&transaction)?;
        Ok(signature)
    }
}

/// Eight-byte discriminator for a top-level anchor instruction
pub fn global_discriminator(name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(format!("global:{name}").as_bytes());
    let hash = hasher.finalize();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}
