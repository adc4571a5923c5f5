//! Residual B-coupon accounting for redemptions.
//!
//! ```text
//! amount B coupons redeemed at rate r (B per FET):
//!   base_credit = amount / r          → paid to beneficiary from escrow
//!   retired     = base_credit × r     → removed from total B supply
//!   residual    = amount % r          → moved into the residual pool
//!
//!   amount == retired + residual
//! ```

use crate::errors::{Error, Result};
use crate::Balance;

/// Outcome of splitting a redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redemption {
    pub base_credit: Balance,
    pub retired: Balance,
    pub residual: Balance,
}

impl Redemption {
    /// `rate` is the policy's redemption rate and is never zero.
    pub fn split(amount: Balance, rate: Balance) -> Result<Self> {
        let base_credit = amount.checked_div(rate).ok_or(Error::ArithmeticOverflow)?;
        let residual = amount.checked_rem(rate).ok_or(Error::ArithmeticOverflow)?;
        let retired = amount - residual;
        Ok(Self {
            base_credit,
            retired,
            residual,
        })
    }
}
