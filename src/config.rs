use super::token::{Token, TokenPair};
use crate::error::SwapError;
use crate::swap::SlippageTolerance;
use crate::utils::time::DEFAULT_DEADLINE_WINDOW;
use crate::utils::types::decimal_to_u256;
use ethers::abi::Address;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{H256, U256};
use rust_decimal::Decimal;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const BSC_CHAIN_ID: u64 = 56;
pub const PANCAKESWAP_ROUTER_ADDRESS: &str = "0x10ED43C718714eb63d5aA57B78B54704E256024E";
pub const PANCAKESWAP_FACTORY_ADDRESS: &str = "0xcA143Ce32Fe78f1f7019d7d551a6402fC5350c73";
pub const PANCAKESWAP_PAIR_INIT_CODE_HASH: &str =
    "0x00fb7f630766e6a796048ea87d01acd3068e8ff67d078148a3fa3f4a84f69bd5";
pub const PANCAKESWAP_FEE_BPS: u32 = 25;
pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

/// Where the signing key comes from.
pub enum CredentialSource {
    PrivateKey(String),
    Keystore { path: PathBuf, password: String },
}

impl CredentialSource {
    pub fn load_wallet(&self, chain_id: u64) -> Result<LocalWallet, SwapError> {
        let wallet = match self {
            CredentialSource::PrivateKey(key) => key
                .parse::<LocalWallet>()
                .map_err(|e| SwapError::Credential(format!("PRIVATE_KEY is not a valid key: {e}")))?,
            CredentialSource::Keystore { path, password } => {
                LocalWallet::decrypt_keystore(path, password).map_err(|e| {
                    SwapError::Credential(format!("could not decrypt {}: {e}", path.display()))
                })?
            }
        };
        Ok(wallet.with_chain_id(chain_id))
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::PrivateKey(_) => f.write_str("PrivateKey(<redacted>)"),
            CredentialSource::Keystore { path, .. } => f
                .debug_struct("Keystore")
                .field("path", path)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub rpc_url: String,
    pub chain_id: u64,
    pub router_address: Address,
    pub factory_address: Address,
    pub pair_init_code_hash: H256,
    pub pair_fee_bps: u32,
    pub token_pair: TokenPair,
    /// In base units of the input token.
    pub amount_in: U256,
    pub slippage: SlippageTolerance,
    /// `None` sends the output back to the signer.
    pub recipient: Option<Address>,
    pub gas_limit: U256,
    pub deadline_window: Duration,
    pub credential: CredentialSource,
}

pub fn generate_config() -> Result<Config, SwapError> {
    Config::from_lookup(|key| env::var(key).ok())
}

impl Config {
    /// Builds the configuration from `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, SwapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let chain_id = vars.parse_or("CHAIN_ID", BSC_CHAIN_ID)?;
        let token_in = vars.token("TOKEN_IN", chain_id, "FROM", "From Token")?;
        let token_out = vars.token("TOKEN_OUT", chain_id, "TO", "To Token")?;
        let token_pair = TokenPair::new(token_in, token_out)?;

        let amount: Decimal = vars.parse_or("SWAP_AMOUNT", Decimal::ONE)?;
        let amount_in = decimal_to_u256(amount, token_pair.token_in.decimals)?;
        if amount_in.is_zero() {
            return Err(SwapError::InvalidInput(format!(
                "SWAP_AMOUNT {amount} is below one base unit of {}",
                token_pair.token_in.symbol
            )));
        }

        let slippage = SlippageTolerance::new(vars.parse_or("SLIPPAGE_PCT", Decimal::from(5))?)?;

        let pair_fee_bps = vars.parse_or("PAIR_FEE_BPS", PANCAKESWAP_FEE_BPS)?;
        if pair_fee_bps >= crate::pair::FEE_DENOMINATOR {
            return Err(SwapError::Config(format!(
                "PAIR_FEE_BPS {pair_fee_bps} must be below {}",
                crate::pair::FEE_DENOMINATOR
            )));
        }

        Ok(Config {
            rpc_url: vars.required("RPC_URL")?,
            chain_id,
            router_address: vars.parse_or_str("ROUTER_ADDRESS", PANCAKESWAP_ROUTER_ADDRESS)?,
            factory_address: vars.parse_or_str("FACTORY_ADDRESS", PANCAKESWAP_FACTORY_ADDRESS)?,
            pair_init_code_hash: vars
                .parse_or_str("PAIR_INIT_CODE_HASH", PANCAKESWAP_PAIR_INIT_CODE_HASH)?,
            pair_fee_bps,
            token_pair,
            amount_in,
            slippage,
            recipient: vars.parse_optional("RECIPIENT_ADDRESS")?,
            gas_limit: U256::from(vars.parse_or("GAS_LIMIT", DEFAULT_GAS_LIMIT)?),
            deadline_window: vars
                .parse_optional("DEADLINE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_DEADLINE_WINDOW),
            credential: vars.credential()?,
        })
    }
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, key: &str) -> Result<String, SwapError> {
        self.get(key)
            .ok_or_else(|| SwapError::Config(format!("{key} environment variable not set")))
    }

    fn parse_optional<T>(&self, key: &str) -> Result<Option<T>, SwapError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.get(key)
            .map(|value| {
                value
                    .parse()
                    .map_err(|e| SwapError::Config(format!("{key} is not valid: {e}")))
            })
            .transpose()
    }

    fn parse_required<T>(&self, key: &str) -> Result<T, SwapError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.parse_optional(key)?
            .ok_or_else(|| SwapError::Config(format!("{key} environment variable not set")))
    }

    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, SwapError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        Ok(self.parse_optional(key)?.unwrap_or(default))
    }

    fn parse_or_str<T>(&self, key: &str, default: &str) -> Result<T, SwapError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.parse_optional(key)? {
            Some(value) => Ok(value),
            None => default
                .parse()
                .map_err(|e| SwapError::Config(format!("default {key} is not valid: {e}"))),
        }
    }

    fn token(
        &self,
        prefix: &str,
        chain_id: u64,
        default_symbol: &str,
        default_name: &str,
    ) -> Result<Token, SwapError> {
        Ok(Token {
            chain_id,
            address: self.parse_required(&format!("{prefix}_ADDRESS"))?,
            decimals: self.parse_or(&format!("{prefix}_DECIMALS"), 18)?,
            symbol: self
                .get(&format!("{prefix}_SYMBOL"))
                .unwrap_or_else(|| default_symbol.to_string()),
            name: self
                .get(&format!("{prefix}_NAME"))
                .unwrap_or_else(|| default_name.to_string()),
        })
    }

    fn credential(&self) -> Result<CredentialSource, SwapError> {
        if let Some(key) = self.get("PRIVATE_KEY") {
            return Ok(CredentialSource::PrivateKey(key));
        }
        match (self.get("KEYSTORE_PATH"), self.get("KEYSTORE_PASSWORD")) {
            (Some(path), Some(password)) => Ok(CredentialSource::Keystore {
                path: PathBuf::from(path),
                password,
            }),
            (Some(_), None) => Err(SwapError::Credential(
                "KEYSTORE_PATH is set but KEYSTORE_PASSWORD is not".to_string(),
            )),
            _ => Err(SwapError::Credential(
                "set PRIVATE_KEY or KEYSTORE_PATH and KEYSTORE_PASSWORD".to_string(),
            )),
        }
    }
}
