use crate::config::Config;
use crate::contracts::uniswap_v2_router::SwapExactTokensForTokensCall;
use crate::error::SwapError;
use crate::pair::PairQuoter;
use crate::swap::{prepare_swap, SwapParameters};
use async_trait::async_trait;
use ethers::abi::AbiEncode;
use ethers::providers::Middleware;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{
    Address, BlockNumber, Bytes, Signature, TransactionReceipt, TransactionRequest, U256, U64,
};
use log::{debug, info};
use std::sync::Arc;

/// The node calls the executor needs.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn gas_price(&self) -> Result<U256, SwapError>;

    async fn pending_nonce(&self, address: Address) -> Result<U256, SwapError>;

    /// Broadcasts a signed transaction and waits for its receipt.
    async fn submit(&self, raw: Bytes) -> Result<TransactionReceipt, SwapError>;
}

pub struct RpcClient<M> {
    client: Arc<M>,
}

impl<M: Middleware + 'static> RpcClient<M> {
    pub fn new(client: Arc<M>) -> Self {
        RpcClient { client }
    }
}

#[async_trait]
impl<M: Middleware + 'static> ChainClient for RpcClient<M> {
    async fn gas_price(&self) -> Result<U256, SwapError> {
        self.client
            .get_gas_price()
            .await
            .map_err(|e| SwapError::Network(format!("could not fetch gas price: {e}")))
    }

    async fn pending_nonce(&self, address: Address) -> Result<U256, SwapError> {
        self.client
            .get_transaction_count(address, Some(BlockNumber::Pending.into()))
            .await
            .map_err(|e| SwapError::Network(format!("could not fetch nonce of {address:?}: {e}")))
    }

    async fn submit(&self, raw: Bytes) -> Result<TransactionReceipt, SwapError> {
        let pending = self
            .client
            .send_raw_transaction(raw)
            .await
            .map_err(|e| SwapError::Network(format!("could not broadcast transaction: {e}")))?;
        let tx_hash = pending.tx_hash();
        info!("Transaction {tx_hash:?} sent, awaiting inclusion");

        pending
            .await
            .map_err(|e| {
                SwapError::Network(format!("could not fetch receipt of {tx_hash:?}: {e}"))
            })?
            .ok_or_else(|| SwapError::Submission(format!("transaction {tx_hash:?} was dropped")))
    }
}

/// Local signing; key material never leaves the process.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    fn sender(&self) -> Address;

    async fn sign_swap(&self, tx: &TypedTransaction) -> Result<Signature, SwapError>;
}

#[async_trait]
impl TransactionSigner for LocalWallet {
    fn sender(&self) -> Address {
        Signer::address(self)
    }

    async fn sign_swap(&self, tx: &TypedTransaction) -> Result<Signature, SwapError> {
        Signer::sign_transaction(self, tx)
            .await
            .map_err(|e| SwapError::Signing(e.to_string()))
    }
}

/// ABI-encoded `swapExactTokensForTokens` call.
pub fn encode_swap_call(params: &SwapParameters) -> Bytes {
    SwapExactTokensForTokensCall {
        amount_in: params.amount_in,
        amount_out_min: params.amount_out_min,
        path: params.path.clone(),
        to: params.recipient,
        deadline: params.deadline,
    }
    .encode()
    .into()
}

pub fn build_swap_transaction(
    config: &Config,
    params: &SwapParameters,
    sender: Address,
    gas_price: U256,
    nonce: U256,
) -> TypedTransaction {
    TransactionRequest::new()
        .from(sender)
        .to(config.router_address)
        .data(encode_swap_call(params))
        .gas(config.gas_limit)
        .gas_price(gas_price)
        .nonce(nonce)
        .chain_id(config.chain_id)
        .into()
}

/// Runs the whole swap once: price, parameters, transaction, signature, submission.
pub async fn swap_tokens<Q, C, S>(
    config: &Config,
    quoter: &Q,
    client: &C,
    signer: &S,
) -> Result<TransactionReceipt, SwapError>
where
    Q: PairQuoter + ?Sized,
    C: ChainClient + ?Sized,
    S: TransactionSigner + ?Sized,
{
    let sender = signer.sender();
    let recipient = config.recipient.unwrap_or(sender);

    let params = prepare_swap(
        quoter,
        &config.token_pair,
        config.amount_in,
        config.slippage,
        recipient,
        config.deadline_window,
    )
    .await?;

    let gas_price = client.gas_price().await?;
    let nonce = client.pending_nonce(sender).await?;
    let tx = build_swap_transaction(config, &params, sender, gas_price, nonce);
    debug!("Unsigned swap transaction: {tx:?}");

    let signature = signer.sign_swap(&tx).await?;
    let raw = tx.rlp_signed(&signature);
    info!(
        "Submitting swap {:?} from {sender:?} via router {:?}, gas price {gas_price}",
        tx.hash(&signature),
        config.router_address
    );

    let receipt = client.submit(raw).await?;
    if receipt.status == Some(U64::zero()) {
        return Err(SwapError::Submission(format!(
            "transaction {:?} reverted",
            receipt.transaction_hash
        )));
    }
    Ok(receipt)
}
