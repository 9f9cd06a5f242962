//! Small multiples of curve generators.

use crate::CurveId;

/// `k·G` for a small `k`.
#[derive(Debug)]
pub struct MulVector {
    /// Curve of the generator.
    pub curve: CurveId,
    /// Multiplier.
    pub k: u32,
    /// Expected `x`-coordinate.
    pub x: &'static str,
    /// Expected `y`-coordinate.
    pub y: &'static str,
}

/// Generator multiples, from the SEC 2 and FIPS 186-4 parameters.
pub const MUL_TEST_VECTORS: &[MulVector] = &[
    MulVector {
        curve: CurveId::NistP192,
        k: 2,
        x: "dafebf5828783f2ad35534631588a3f629a70fb16982a888",
        y: "dd6bda0d993da0fa46b27bbc141b868f59331afa5c7e93ab",
    },
    MulVector {
        curve: CurveId::NistP192,
        k: 3,
        x: "76e32a2557599e6edcd283201fb2b9aadfd0d359cbb263da",
        y: "782c37e372ba4520aa62e0fed121d49ef3b543660cfd05fd",
    },
    MulVector {
        curve: CurveId::NistP256,
        k: 2,
        x: "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
        y: "07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1",
    },
    MulVector {
        curve: CurveId::NistP256,
        k: 3,
        x: "5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c",
        y: "8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032",
    },
    MulVector {
        curve: CurveId::NistP384,
        k: 2,
        x: "08d999057ba3d2d969260045c55b97f089025959a6f434d651d207d19fb96e9e4fe0e86ebe0e64f85b96a9c75295df61",
        y: "8e80f1fa5b1b3cedb7bfe8dffd6dba74b275d875bc6cc43e904e505f256ab4255ffd43e94d39e22d61501e700a940e80",
    },
    MulVector {
        curve: CurveId::NistP384,
        k: 3,
        x: "077a41d4606ffa1464793c7e5fdc7d98cb9d3910202dcd06bea4f240d3566da6b408bbae5026580d02d7e5c70500c831",
        y: "c995f7ca0b0c42837d0bbe9602a9fc998520b41c85115aa5f7684c0edc111eacc24abd6be4b5d298b65f28600a2f1df1",
    },
    MulVector {
        curve: CurveId::Secp256k1,
        k: 2,
        x: "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        y: "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
    },
    MulVector {
        curve: CurveId::Secp256k1,
        k: 3,
        x: "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        y: "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
    },
];

/// Multiples `0·G` through `19·G` on the 17-element test curve.
/// `None` is the point at infinity.
pub const TEST17_MULTIPLES: [Option<(u8, u8)>; 20] = [
    None,
    Some((5, 1)),
    Some((6, 3)),
    Some((10, 6)),
    Some((3, 1)),
    Some((9, 16)),
    Some((16, 13)),
    Some((0, 6)),
    Some((13, 7)),
    Some((7, 6)),
    Some((7, 11)),
    Some((13, 10)),
    Some((0, 11)),
    Some((16, 4)),
    Some((9, 1)),
    Some((3, 16)),
    Some((10, 11)),
    Some((6, 14)),
    Some((5, 16)),
    None,
];
