//! ECDSA test vectors.

use crate::CurveId;

/// Fixed-nonce ECDSA signature.
///
/// `m` is the message digest; `r` and `s` are the signature exactly as
/// produced by the signing equation, without low-S normalization.
#[derive(Debug)]
pub struct SignatureVector {
    /// Curve.
    pub curve: CurveId,
    /// Private scalar.
    pub d: &'static str,
    /// Public key `x`-coordinate.
    pub q_x: &'static str,
    /// Public key `y`-coordinate.
    pub q_y: &'static str,
    /// Nonce.
    pub k: &'static str,
    /// Message digest.
    pub m: &'static str,
    /// Signature `r`.
    pub r: &'static str,
    /// Signature `s`.
    pub s: &'static str,
}

/// Vectors adapted from the FIPS 186-2 (P-192, SHA-1) and FIPS 186-4
/// (P-224 with SHA-224, P-256 with SHA-256) `SigGen.txt` files in the
/// NIST CAVP ECDSA test vectors, plus one secp256k1 vector.
/// <https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/digital-signatures>
pub const ECDSA_TEST_VECTORS: &[SignatureVector] = &[
    SignatureVector {
        curve: CurveId::NistP192,
        d: "0017899949d02b55f9556846411cc9de512c6f16ecdeb1c4",
        q_x: "14f69738599689f5706ab71343becc886ef1569a2d1137fe",
        q_y: "0cf5a433909e33217fb4df6b9593f71d43fb1c2a5653b763",
        k: "0098e9c07e8e6adb97b77d85b0c10a265e11737a89a3e37b",
        m: "000000005c8190e87adb631bb5537f3f5f478888bd002ff5",
        r: "af1f749e3df6220ff04efd178618a977e0838b1b9dc126e3",
        s: "8990a04c6cc0ff26264ecf8f7831381a9dbc6e53cc8cc860",
    },
    SignatureVector {
        curve: CurveId::NistP192,
        d: "0064c3a51fb6188170f3cdf12b474a77de4ae0052b84ece8",
        q_x: "386afa71afc065019f3d2021ead531ed1d365887122d2d4b",
        q_y: "bbfb6e9cdb32c2252015acfb4cfb049b08b4cb279c64928a",
        k: "00797552b9abf541c886f93556103b817a46c9aa0e2bc86f",
        m: "00000000005e97fa0177ffff868cdac356508e22cbe730d2",
        r: "337be42eebdcedd97678eeaae9d1b231b740a191a293c22a",
        s: "9d6766b391e95f649e05442453a85466da29eaa97ddcfc62",
    },
    SignatureVector {
        curve: CurveId::NistP192,
        d: "00abd205ef412646907d2e4886b8ffd7d94678bd3818ed54",
        q_x: "3b1c19d73b6a4d7a12003530a54ae0f5ba18d75c98a0db95",
        q_y: "afb8bd8c94c6e3d5dc050e3641c0fad771557ce97f5f3dba",
        k: "00b81567f9e19c4ace373a26337488c1a476b7ee8d8e52bf",
        m: "00000000619c5a0cea316912adbf92a8212bad2187453bc6",
        r: "e36d5dbb9560d959814cbd30aa6a405da9652fbd250da9ab",
        s: "f2db3d62733f6d08b08ef0682f579ac527950117f39e474b",
    },
    SignatureVector {
        curve: CurveId::NistP224,
        d: "16797b5c0c7ed5461e2ff1b88e6eafa03c0f46bf072000dfc830d615",
        q_x: "605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab",
        q_y: "f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669",
        k: "d9a5a7328117f48b4b8dd8c17dae722e756b3ff64bd29a527137eec0",
        m: "07eb2a50bf70eee87467600614a490e7600437d077ec651a27e65e67",
        r: "2fc2cff8cdd4866b1d74e45b07d333af46b7af0888049d0fdbc7b0d6",
        s: "8d9cc4c8ea93e0fd9d6431b9a1fd99b88f281793396321b11dac41eb",
    },
    SignatureVector {
        curve: CurveId::NistP224,
        d: "cf020a1ff36c28511191482ed1e5259c60d383606c581948c3fbe2c5",
        q_x: "fa21f85b99d3dc18c6d53351fbcb1e2d029c00fa7d1663a3dd94695e",
        q_y: "e9e79578f8988b168edff1a8b34a5ed9598cc20acd1f0aed36715d88",
        k: "c780d047454824af98677cf310117e5f9e99627d02414f136aed8e83",
        m: "bde0fbb390fb05d0b75df5bd0d0a4ea29516125f19830e3b0c93b641",
        r: "45145f06b566ec9fd0fee1b6c6551a4535c7a3bbfc0fede45f4f5038",
        s: "7302dff12545b069cf27df49b26e4781270585463656f2834917c3ca",
    },
    SignatureVector {
        curve: CurveId::NistP224,
        d: "dde6f173fa9f307d206ce46b4f02851ebce9638a989330249fd30b73",
        q_x: "fc21a99b060afb0d9dbf3250ea3c4da10be94ce627a65874d8e4a630",
        q_y: "e8373ab7190890326aac4aacca3eba89e15d1086a05434dd033fd3f3",
        k: "6629366a156840477df4875cfba4f8faa809e394893e1f5525326d07",
        m: "c2c03fe07e10538f6a38d5831b5dda9ce7478b3ed31323d60617dc95",
        r: "41f8e2b1ae5add7c24da8725a067585a3ad6d5a9ed9580beb226f23a",
        s: "a5d71bff02dce997305dd337128046f36714398f4ef6647599712fae",
    },
    SignatureVector {
        curve: CurveId::NistP256,
        d: "519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464",
        q_x: "1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83",
        q_y: "ce4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9",
        k: "94a1bbb14b906a61a280f245f9e93c7f3b4a6247824f5d33b9670787642a68de",
        m: "44acf6b7e36c1342c2c5897204fe09504e1e2efb1a900377dbc4e7a6a133ec56",
        r: "f3ac8061b514795b8843e3d6629527ed2afd6b1f6a555a7acabb5e6f79c8c2ac",
        s: "8bf77819ca05a6b2786c76262bf7371cef97b218e96f175a3ccdda2acc058903",
    },
    SignatureVector {
        curve: CurveId::Secp256k1,
        d: "ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f",
        q_x: "779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd",
        q_y: "e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f",
        k: "49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a",
        m: "4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a",
        r: "241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795",
        s: "021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e",
    },
];
