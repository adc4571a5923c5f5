/// Failure of a FedCoup operation.
///
/// Every variant aborts the message that produced it; the contract state is
/// left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Amount is zero.
    InvalidAmount,
    /// Debit exceeds the available balance.
    InsufficientBalance,
    /// Spender's allowance is insufficient.
    InsufficientAllowance,
    /// Redemption beneficiary holds no base tokens.
    UnauthorizedBeneficiary,
    /// The base-token leg of a coupon operation failed.
    ExternalTransferFailure,
    /// A conversion or accumulation exceeded `u128`.
    ArithmeticOverflow,
    /// A conversion factor of zero was supplied at instantiation.
    InvalidConversionFactor,
}

pub type Result<T> = core::result::Result<T, Error>;
