use crate::error::SwapError;
use crate::pair::PairQuoter;
use crate::token::TokenPair;
use crate::utils::time::get_swap_deadline_from_now;
use crate::utils::types::format_amount;
use ethers::types::{Address, U256, U512};
use log::info;
use rust_decimal::Decimal;
use std::fmt;
use std::time::Duration;

/// Accepted adverse price movement, as a percentage in `[0, 100)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlippageTolerance(Decimal);

impl SlippageTolerance {
    pub fn new(percent: Decimal) -> Result<Self, SwapError> {
        if percent.is_sign_negative() || percent >= Decimal::ONE_HUNDRED {
            return Err(SwapError::InvalidInput(format!(
                "slippage tolerance {percent}% is outside [0, 100)"
            )));
        }
        Ok(SlippageTolerance(percent.normalize()))
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// `floor(amount_out * (100 - percent) / 100)`, evaluated exactly.
    ///
    /// The percentage is scaled to an integer ratio and the product is widened
    /// to 512 bits, so the result is never above the tolerated amount.
    pub fn minimum_amount_out(&self, amount_out: U256) -> Result<U256, SwapError> {
        let scale = 10u128.pow(self.0.scale());
        let denominator = 100 * scale;
        let numerator = denominator - self.0.mantissa().unsigned_abs();

        let product = amount_out.full_mul(U256::from(numerator));
        U256::try_from(product / U512::from(denominator)).map_err(|_| {
            SwapError::InvalidInput(format!("minimum output for {amount_out} overflows"))
        })
    }
}

impl fmt::Display for SlippageTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapParameters {
    pub amount_in: U256,
    /// Fair-value output at the current pair price.
    pub amount_out: U256,
    pub amount_out_min: U256,
    pub path: Vec<Address>,
    pub recipient: Address,
    pub deadline: U256,
}

pub async fn prepare_swap<Q: PairQuoter + ?Sized>(
    quoter: &Q,
    pair: &TokenPair,
    amount_in: U256,
    slippage: SlippageTolerance,
    recipient: Address,
    deadline_window: Duration,
) -> Result<SwapParameters, SwapError> {
    if amount_in.is_zero() {
        return Err(SwapError::InvalidInput(
            "input amount must be positive".to_string(),
        ));
    }

    let amount_out = quoter.quote_exact_input(pair, amount_in).await?;
    let amount_out_min = slippage.minimum_amount_out(amount_out)?;
    let path = pair.path();
    let deadline = get_swap_deadline_from_now(deadline_window);

    info!("Swapping {} for {}", pair.token_in, pair.token_out);
    info!(
        "Amount In: {amount_in} ({} {})",
        format_amount(amount_in, pair.token_in.decimals),
        pair.token_in.symbol
    );
    info!(
        "Amount Out: {amount_out}, Amount Out Min: {amount_out_min} ({} {}, slippage {slippage})",
        format_amount(amount_out_min, pair.token_out.decimals),
        pair.token_out.symbol
    );
    info!("Path: {path:?}, Recipient: {recipient:?}, Deadline: {deadline}");

    Ok(SwapParameters {
        amount_in,
        amount_out,
        amount_out_min,
        path,
        recipient,
        deadline,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::token::tests::from_to_pair;
    use crate::utils::time::DEFAULT_DEADLINE_WINDOW;
    use async_trait::async_trait;
    use std::str::FromStr;
    use std::time::SystemTime;

    /// Prices every input at a fixed `numerator / denominator` rate.
    pub(crate) struct FixedRateQuoter {
        pub numerator: u64,
        pub denominator: u64,
    }

    #[async_trait]
    impl PairQuoter for FixedRateQuoter {
        async fn quote_exact_input(
            &self,
            _pair: &TokenPair,
            amount_in: U256,
        ) -> Result<U256, SwapError> {
            Ok(amount_in * U256::from(self.numerator) / U256::from(self.denominator))
        }
    }

    pub(crate) struct MissingPairQuoter;

    #[async_trait]
    impl PairQuoter for MissingPairQuoter {
        async fn quote_exact_input(
            &self,
            pair: &TokenPair,
            _amount_in: U256,
        ) -> Result<U256, SwapError> {
            Err(SwapError::DataUnavailable(format!(
                "no pool for {}",
                pair.symbol()
            )))
        }
    }

    fn slippage(percent: &str) -> SlippageTolerance {
        SlippageTolerance::new(Decimal::from_str(percent).unwrap()).unwrap()
    }

    fn one_token() -> U256 {
        U256::exp10(18)
    }

    #[test]
    fn slippage_must_be_below_one_hundred_percent() {
        assert!(SlippageTolerance::new(Decimal::ZERO).is_ok());
        assert!(SlippageTolerance::new(Decimal::from_str("99.99").unwrap()).is_ok());
        assert!(SlippageTolerance::new(Decimal::ONE_HUNDRED).is_err());
        assert!(SlippageTolerance::new(Decimal::from(-1)).is_err());
    }

    #[test]
    fn zero_slippage_keeps_the_full_output() {
        let out = U256::from(123_456_789u64);
        assert_eq!(slippage("0").minimum_amount_out(out).unwrap(), out);
    }

    #[test]
    fn minimum_rounds_down() {
        // 999 * 0.95 = 949.05
        assert_eq!(
            slippage("5").minimum_amount_out(U256::from(999u64)).unwrap(),
            U256::from(949u64)
        );
        // 1001 * 0.995 = 995.995
        assert_eq!(
            slippage("0.5").minimum_amount_out(U256::from(1001u64)).unwrap(),
            U256::from(995u64)
        );
    }

    #[test]
    fn minimum_never_exceeds_fair_output() {
        let outputs = [U256::one(), U256::from(7u64), one_token() * 3, U256::MAX];
        for percent in ["0", "0.01", "1", "5", "33.333", "50", "99.9"] {
            for out in outputs {
                let min = slippage(percent).minimum_amount_out(out).unwrap();
                assert!(min <= out, "{percent}% of {out} gave {min}");
            }
        }
    }

    #[tokio::test]
    async fn five_percent_of_a_one_to_two_pool() {
        let quoter = FixedRateQuoter {
            numerator: 2,
            denominator: 1,
        };
        let pair = from_to_pair();
        let params = prepare_swap(
            &quoter,
            &pair,
            one_token(),
            slippage("5"),
            Address::zero(),
            DEFAULT_DEADLINE_WINDOW,
        )
        .await
        .unwrap();

        assert_eq!(params.amount_out, one_token() * 2);
        assert_eq!(params.amount_out_min, U256::from(19u64) * U256::exp10(17));
        assert_eq!(params.path, pair.path());
    }

    #[tokio::test]
    async fn no_slippage_demands_the_exact_quote() {
        let quoter = FixedRateQuoter {
            numerator: 2,
            denominator: 1,
        };
        let params = prepare_swap(
            &quoter,
            &from_to_pair(),
            one_token(),
            slippage("0"),
            Address::zero(),
            DEFAULT_DEADLINE_WINDOW,
        )
        .await
        .unwrap();

        assert_eq!(params.amount_out_min, one_token() * 2);
    }

    #[tokio::test]
    async fn deadline_is_twenty_minutes_out() {
        let quoter = FixedRateQuoter {
            numerator: 1,
            denominator: 1,
        };
        let now = || {
            SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap()
                .as_secs()
        };
        let before = now();
        let params = prepare_swap(
            &quoter,
            &from_to_pair(),
            one_token(),
            slippage("1"),
            Address::zero(),
            DEFAULT_DEADLINE_WINDOW,
        )
        .await
        .unwrap();
        let after = now();

        let deadline = params.deadline.as_u64();
        assert!(deadline >= before + 1200 && deadline <= after + 1200);
    }

    #[tokio::test]
    async fn missing_pair_is_data_unavailable() {
        let err = prepare_swap(
            &MissingPairQuoter,
            &from_to_pair(),
            one_token(),
            slippage("5"),
            Address::zero(),
            DEFAULT_DEADLINE_WINDOW,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SwapError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn zero_input_is_rejected() {
        let quoter = FixedRateQuoter {
            numerator: 2,
            denominator: 1,
        };
        let err = prepare_swap(
            &quoter,
            &from_to_pair(),
            U256::zero(),
            slippage("5"),
            Address::zero(),
            DEFAULT_DEADLINE_WINDOW,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SwapError::InvalidInput(_)));
    }
}
