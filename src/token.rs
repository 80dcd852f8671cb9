use crate::error::SwapError;
use ethers::abi::Address;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub chain_id: u64,
    pub address: Address,
    pub decimals: u32,
    pub symbol: String,
    pub name: String,
}

impl Token {
    /// V2 pairs store the token with the lower address as `token0`.
    pub fn sorts_before(&self, other: &Token) -> bool {
        self.address < other.address
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[derive(Clone, Debug)]
pub struct TokenPair {
    pub token_in: Token,
    pub token_out: Token,
}

impl TokenPair {
    pub fn new(token_in: Token, token_out: Token) -> Result<Self, SwapError> {
        if token_in.chain_id != token_out.chain_id {
            return Err(SwapError::Config(format!(
                "{} is on chain {} but {} is on chain {}",
                token_in.symbol, token_in.chain_id, token_out.symbol, token_out.chain_id
            )));
        }
        if token_in.address == token_out.address {
            return Err(SwapError::Config(format!(
                "input and output token share address {:?}",
                token_in.address
            )));
        }
        Ok(TokenPair {
            token_in,
            token_out,
        })
    }

    pub fn symbol(&self) -> String {
        format!("{}/{}", self.token_in.symbol, self.token_out.symbol)
    }

    /// Tokens in pair-contract order: `(token0, token1)`.
    pub fn sorted(&self) -> (&Token, &Token) {
        if self.token_in.sorts_before(&self.token_out) {
            (&self.token_in, &self.token_out)
        } else {
            (&self.token_out, &self.token_in)
        }
    }

    pub fn path(&self) -> Vec<Address> {
        vec![self.token_in.address, self.token_out.address]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn token(symbol: &str, address: &str) -> Token {
        Token {
            chain_id: 56,
            address: address.parse().unwrap(),
            decimals: 18,
            symbol: symbol.to_string(),
            name: format!("{symbol} Token"),
        }
    }

    pub(crate) fn from_to_pair() -> TokenPair {
        TokenPair::new(
            token("FROM", "0xF34a62AEC2b5f7917D43e45076E57c16a48054E9"),
            token("TO", "0x5985cE6217E28Be9570A4a1DeF704A255f792CB4"),
        )
        .unwrap()
    }

    #[test]
    fn sorted_puts_lower_address_first() {
        let pair = from_to_pair();
        let (token0, token1) = pair.sorted();
        assert_eq!(token0.symbol, "TO");
        assert_eq!(token1.symbol, "FROM");
        assert_eq!(pair.symbol(), "FROM/TO");
        assert_eq!(
            pair.path(),
            vec![pair.token_in.address, pair.token_out.address]
        );
    }

    #[test]
    fn display_shows_name_and_symbol() {
        let pair = from_to_pair();
        assert_eq!(pair.token_in.to_string(), "FROM Token (FROM)");
        assert_eq!(
            format!("{} -> {}", pair.token_in, pair.token_out),
            "FROM Token (FROM) -> TO Token (TO)"
        );
    }

    #[test]
    fn rejects_same_token_twice() {
        let a = token("A", "0xF34a62AEC2b5f7917D43e45076E57c16a48054E9");
        let err = TokenPair::new(a.clone(), a).unwrap_err();
        assert!(matches!(err, SwapError::Config(_)));
    }

    #[test]
    fn rejects_tokens_on_different_chains() {
        let a = token("A", "0xF34a62AEC2b5f7917D43e45076E57c16a48054E9");
        let mut b = token("B", "0x5985cE6217E28Be9570A4a1DeF704A255f792CB4");
        b.chain_id = 1;
        assert!(TokenPair::new(a, b).is_err());
    }
}
