use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// One evaluation point (x, y) of the secret-encoding polynomial.
///
/// `x` is the share's declared index and `y` its decoded value. Shares
/// are immutable once built; the engine only reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub x: i64,
    pub y: BigInt,
}

impl Share {
    pub fn new(x: i64, y: BigInt) -> Self {
        Self { x, y }
    }
}
