//! ECDH test vectors.

use crate::CurveId;

/// Two private scalars and the secret they agree on.
#[derive(Debug)]
pub struct EcdhVector {
    /// Curve.
    pub curve: CurveId,
    /// First party's private scalar.
    pub d_a: &'static str,
    /// Second party's private scalar.
    pub d_b: &'static str,
    /// Expected shared secret, the `x`-coordinate of `dA·dB·G`.
    pub shared_x: &'static str,
}

/// Shared secrets.
pub const ECDH_TEST_VECTORS: &[EcdhVector] = &[
    EcdhVector {
        curve: CurveId::NistP256,
        d_a: "519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464",
        d_b: "94a1bbb14b906a61a280f245f9e93c7f3b4a6247824f5d33b9670787642a68de",
        shared_x: "7ff2da2997bacc2d13a24373649c43030e1b7f3fce8ae33c959c46dd91682add",
    },
    EcdhVector {
        curve: CurveId::Test17,
        d_a: "3",
        d_b: "7",
        shared_x: "6",
    },
];
