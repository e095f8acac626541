use kata_common::error::{KataError, Result};

/// Largest `n` whose factorial fits in a `u128`.
const MAX_N: i64 = 34;

/// Computes `n!` iteratively.
///
/// `factorial(0)` and `factorial(1)` are both 1. Negative `n` is
/// rejected, as is any `n` whose product would not fit in a `u128`; the
/// iterative accumulation keeps the stack flat no matter how large `n`
/// is allowed to grow.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(KataError::validation(format!(
            "factorial is undefined for negative numbers, got {n}"
        )));
    }
    if n > MAX_N {
        return Err(KataError::validation(format!(
            "factorial({n}) exceeds the supported range (n <= {MAX_N})"
        )));
    }

    let mut product: u128 = 1;
    for factor in 2..=n as u128 {
        product = product.checked_mul(factor).ok_or_else(|| {
            KataError::validation(format!("factorial({n}) overflows"))
        })?;
    }

    Ok(product)
}
