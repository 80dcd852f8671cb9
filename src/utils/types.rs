use crate::error::SwapError;
use ethers::types::U256;
use ethers::utils::format_units;
use log::debug;
use rust_decimal::{Decimal, MathematicalOps};

/// Converts a whole-token amount into base units, rounding down.
pub fn decimal_to_u256(dec: Decimal, decimals: u32) -> Result<U256, SwapError> {
    if dec.is_sign_negative() {
        return Err(SwapError::InvalidInput(format!(
            "amount {dec} is negative"
        )));
    }
    let rounded = Decimal::from(10)
        .checked_powu(decimals as u64)
        .and_then(|scale| dec.checked_mul(scale))
        .ok_or_else(|| {
            SwapError::InvalidInput(format!(
                "amount {dec} with {decimals} decimals does not fit a decimal"
            ))
        })?
        .floor();
    debug!("decimal_to_u256, dec={dec}, decimals={decimals}, rounded={rounded}");
    U256::from_dec_str(rounded.to_string().as_str())
        .map_err(|e| SwapError::InvalidInput(format!("amount {rounded}: {e}")))
}

/// Human-readable rendering of a base-unit amount, for logs.
pub fn format_amount(amount: U256, decimals: u32) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn scales_whole_tokens_to_base_units() {
        let one = decimal_to_u256(Decimal::ONE, 18).unwrap();
        assert_eq!(one, U256::exp10(18));

        let half = decimal_to_u256(Decimal::from_str("0.5").unwrap(), 6).unwrap();
        assert_eq!(half, U256::from(500_000u64));
    }

    #[test]
    fn drops_digits_below_the_smallest_unit() {
        let amount = decimal_to_u256(Decimal::from_str("1.23456789").unwrap(), 6).unwrap();
        assert_eq!(amount, U256::from(1_234_567u64));
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = decimal_to_u256(Decimal::from(-1), 18).unwrap_err();
        assert!(matches!(err, SwapError::InvalidInput(_)));
    }

    #[test]
    fn formats_by_decimals() {
        assert_eq!(format_amount(U256::from(1_500_000u64), 6), "1.500000");
    }
}
