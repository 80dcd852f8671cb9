use crate::contracts::uniswap_v2_pair::UniswapV2Pair;
use crate::error::SwapError;
use crate::token::{Token, TokenPair};
use async_trait::async_trait;
use ethers::providers::Middleware;
use ethers::types::{Address, H256, U256};
use ethers::utils::{get_create2_address_from_hash, keccak256};
use log::{debug, info};
use std::sync::Arc;

pub const FEE_DENOMINATOR: u32 = 10_000;

/// Snapshot of a V2 pool, tokens in contract order.
#[derive(Clone, Debug)]
pub struct Pair {
    pub address: Address,
    pub token_0: Token,
    pub token_1: Token,
    pub reserve_0: U256,
    pub reserve_1: U256,
    pub fee_bps: u32,
}

impl Pair {
    /// `(reserve_in, reserve_out)` when selling `input`.
    pub fn reserves_for(&self, input: &Token) -> Result<(U256, U256), SwapError> {
        if input.address == self.token_0.address {
            Ok((self.reserve_0, self.reserve_1))
        } else if input.address == self.token_1.address {
            Ok((self.reserve_1, self.reserve_0))
        } else {
            Err(SwapError::InvalidInput(format!(
                "{} is not part of pair {:?}",
                input.symbol, self.address
            )))
        }
    }

    /// Constant-product output for an exact input, fee taken from the input.
    pub fn get_amount_out(&self, input: &Token, amount_in: U256) -> Result<U256, SwapError> {
        if amount_in.is_zero() {
            return Err(SwapError::InvalidInput(
                "input amount must be positive".to_string(),
            ));
        }
        let (reserve_in, reserve_out) = self.reserves_for(input)?;
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(SwapError::DataUnavailable(format!(
                "pair {:?} has no liquidity",
                self.address
            )));
        }

        let overflow =
            || SwapError::InvalidInput(format!("amount {amount_in} overflows pair pricing"));
        let amount_in_with_fee = amount_in
            .checked_mul(U256::from(FEE_DENOMINATOR - self.fee_bps))
            .ok_or_else(overflow)?;
        let numerator = amount_in_with_fee
            .checked_mul(reserve_out)
            .ok_or_else(overflow)?;
        let denominator = reserve_in
            .checked_mul(U256::from(FEE_DENOMINATOR))
            .and_then(|r| r.checked_add(amount_in_with_fee))
            .ok_or_else(overflow)?;

        let amount_out = numerator / denominator;
        if amount_out.is_zero() {
            return Err(SwapError::DataUnavailable(format!(
                "pair {:?} cannot price {amount_in} {}",
                self.address, input.symbol
            )));
        }
        Ok(amount_out)
    }
}

/// CREATE2 address of the V2 pair for `pair` under `factory`.
pub fn pair_address(factory: Address, init_code_hash: H256, pair: &TokenPair) -> Address {
    let (token_0, token_1) = pair.sorted();
    let salt = keccak256([token_0.address.as_bytes(), token_1.address.as_bytes()].concat());
    get_create2_address_from_hash(factory, salt, init_code_hash)
}

/// Source of the fair-value output for selling `amount_in` of the input token.
#[async_trait]
pub trait PairQuoter: Send + Sync {
    async fn quote_exact_input(&self, pair: &TokenPair, amount_in: U256)
        -> Result<U256, SwapError>;
}

/// Reads pair reserves straight from the pool contract.
pub struct PairFetcher<M> {
    client: Arc<M>,
    factory: Address,
    init_code_hash: H256,
    fee_bps: u32,
}

impl<M: Middleware + 'static> PairFetcher<M> {
    pub fn new(client: Arc<M>, factory: Address, init_code_hash: H256, fee_bps: u32) -> Self {
        PairFetcher {
            client,
            factory,
            init_code_hash,
            fee_bps,
        }
    }

    pub async fn fetch_pair_data(&self, pair: &TokenPair) -> Result<Pair, SwapError> {
        let address = pair_address(self.factory, self.init_code_hash, pair);
        debug!("Fetching reserves of {} at {address:?}", pair.symbol());

        let contract = UniswapV2Pair::new(address, self.client.clone());
        let (reserve_0, reserve_1, _) = contract.get_reserves().call().await.map_err(|e| {
            SwapError::DataUnavailable(format!(
                "could not read {} pair at {address:?}, check the token addresses: {e}",
                pair.symbol()
            ))
        })?;

        let (token_0, token_1) = pair.sorted();
        info!(
            "{} reserves: {reserve_0} {} / {reserve_1} {}",
            pair.symbol(),
            token_0.symbol,
            token_1.symbol
        );

        Ok(Pair {
            address,
            token_0: token_0.clone(),
            token_1: token_1.clone(),
            reserve_0: U256::from(reserve_0),
            reserve_1: U256::from(reserve_1),
            fee_bps: self.fee_bps,
        })
    }
}

#[async_trait]
impl<M: Middleware + 'static> PairQuoter for PairFetcher<M> {
    async fn quote_exact_input(
        &self,
        pair: &TokenPair,
        amount_in: U256,
    ) -> Result<U256, SwapError> {
        let pair_data = self.fetch_pair_data(pair).await?;
        pair_data.get_amount_out(&pair.token_in, amount_in)
    }
}
