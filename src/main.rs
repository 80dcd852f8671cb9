mod config;
mod contracts;
mod error;
mod executor;
mod pair;
mod swap;
mod token;
mod utils;

use error::SwapError;
use ethers::providers::{Http, Provider};
use ethers::types::TransactionReceipt;
use executor::{swap_tokens, RpcClient, TransactionSigner};
use log::{error, info};
use pair::PairFetcher;
use std::process::ExitCode;
use std::sync::Arc;

async fn run() -> Result<TransactionReceipt, SwapError> {
    let config = config::generate_config()?;
    info!(
        "Configuration loaded: swapping {} for {} on chain {} via router {:?}",
        config.token_pair.token_in,
        config.token_pair.token_out,
        config.chain_id,
        config.router_address
    );

    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .map_err(|e| SwapError::Config(format!("RPC_URL is not valid: {e}")))?;
    let provider = Arc::new(provider);

    let wallet = config.credential.load_wallet(config.chain_id)?;
    info!("Signing as {:?}", wallet.sender());

    let quoter = PairFetcher::new(
        provider.clone(),
        config.factory_address,
        config.pair_init_code_hash,
        config.pair_fee_bps,
    );
    let client = RpcClient::new(provider);

    swap_tokens(&config, &quoter, &client, &wallet).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting up..");
    match run().await {
        Ok(receipt) => {
            info!(
                "Swap included in block {:?}, gas used {:?}",
                receipt.block_number, receipt.gas_used
            );
            println!("Transaction receipt: {receipt:#?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error during token swap ({} stage): {e}", e.stage());
            ExitCode::FAILURE
        }
    }
}
