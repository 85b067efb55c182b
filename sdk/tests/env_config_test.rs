//! Test that provider and registry configuration resolve from the
//! environment correctly

use stakefarm_sdk::*;

// Each test owns a distinct set of environment variables so the default
// multi-threaded test runner cannot race them.

#[test]
fn provider_from_env() {
    std::env::remove_var(provider::PROVIDER_URL_ENV);
    let err = Provider::env().unwrap_err();
    assert!(matches!(err, SdkError::MissingEnv(_)));

    std::env::set_var(provider::PROVIDER_URL_ENV, "http://localhost:8899");
    std::env::set_var(provider::WALLET_ENV, "/tmp/smoke-wallet.json");

    let provider = Provider::env().unwrap();
    match provider.cluster {
        Cluster::Custom(ref rpc, ref ws) => {
            assert_eq!(rpc, "http://localhost:8899");
            assert_eq!(ws, "ws://localhost:8900");
        }
        ref other => panic!("expected custom cluster, got {other:?}"),
    }
    assert_eq!(provider.wallet_path, "/tmp/smoke-wallet.json");

    // Monikers bypass the websocket derivation entirely
    std::env::set_var(provider::PROVIDER_URL_ENV, "devnet");
    let provider = Provider::env().unwrap();
    assert!(matches!(provider.cluster, Cluster::Devnet));

    // A tilde wallet path comes back expanded against $HOME
    std::env::set_var(provider::WALLET_ENV, "~/stakefarm-id.json");
    let provider = Provider::env().unwrap();
    assert!(!provider.wallet_path.starts_with('~'));
    assert!(provider.wallet_path.ends_with("/stakefarm-id.json"));

    std::env::remove_var(provider::PROVIDER_URL_ENV);
    std::env::remove_var(provider::WALLET_ENV);
}

#[test]
fn registry_env_override() {
    let key = workspace::program_id_env_key(workspace::STAKING_FARM);
    assert_eq!(key, "STAKINGFARMPROJECT_PROGRAM_ID");

    let redeployed = solana_sdk::pubkey::Pubkey::new_unique();
    std::env::set_var(&key, redeployed.to_string());
    assert_eq!(Workspace::resolve(workspace::STAKING_FARM).unwrap(), redeployed);

    std::env::set_var(&key, "not-a-pubkey");
    let err = Workspace::resolve(workspace::STAKING_FARM).unwrap_err();
    assert!(matches!(err, SdkError::InvalidProgramId { .. }));

    std::env::remove_var(&key);
    assert_eq!(
        Workspace::resolve(workspace::STAKING_FARM)
            .unwrap()
            .to_string(),
        "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS"
    );
}

#[test]
fn missing_wallet_file_is_an_error() {
    let provider = Provider {
        cluster: Cluster::Localnet,
        wallet_path: "/nonexistent/smoke/id.json".to_string(),
    };
    let err = provider.keypair().unwrap_err();
    assert!(matches!(err, SdkError::WalletUnreadable(_)));
}
