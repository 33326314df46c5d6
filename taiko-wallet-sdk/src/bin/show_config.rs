use taiko_wallet_sdk::{EcosystemConfig, NetworkRegistry, WalletConfig};

fn main() -> anyhow::Result<()> {
    let registry = NetworkRegistry::from_env();
    let ecosystem = EcosystemConfig::from_env();
    let wallet_config = WalletConfig::from_env()?;

    println!("Taiko Wallet SDK Configuration:\n");
    for (network, config) in registry.iter() {
        println!(
            "  {} ({}): chain {}, testnet: {}, RPC URL: {}",
            network, config.name, config.chain_id, config.is_testnet, config.rpc_url
        );
    }
    println!();
    println!("  Selected Network: {}", wallet_config.network);
    println!("  Selected RPC URL: {}", registry.get(wallet_config.network).rpc_url);
    println!("  Shield On Startup: {}", wallet_config.enable_protection);
    println!();
    println!("  Wallet Domain: {}", ecosystem.ecosystem_wallet_domain);
    println!("  Ecosystem ID: {}", ecosystem.ecosystem_id);
    println!("  Window Strategy: {:?}", ecosystem.window_strategy);
    Ok(())
}
