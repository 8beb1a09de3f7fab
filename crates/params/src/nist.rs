//! NIST prime-field curve domain parameters (FIPS 186-4, Appendix D.1.2)
//!
//! Every value is the hexadecimal big-endian literal from the standard.
//! `a` is stored as published, which is `p - 3` for all five curves.

/// Domain parameters of a short-Weierstrass curve `y² = x³ + ax + b` over F_p
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConstants {
    /// Canonical NIST name, e.g. `"P-256"`
    pub name: &'static str,
    /// SEC 2 name, e.g. `"secp256r1"`
    pub sec_name: &'static str,
    /// Field prime
    pub p: &'static str,
    /// Curve coefficient a
    pub a: &'static str,
    /// Curve coefficient b
    pub b: &'static str,
    /// Base point x-coordinate
    pub g_x: &'static str,
    /// Base point y-coordinate
    pub g_y: &'static str,
    /// Order of the base point
    pub n: &'static str,
    /// Cofactor
    pub h: u32,
}

/// NIST P-192
pub const NIST_P192: CurveConstants = CurveConstants {
    name: "P-192",
    sec_name: "secp192r1",
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    g_x: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    g_y: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
    n: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    h: 1,
};

/// NIST P-224
pub const NIST_P224: CurveConstants = CurveConstants {
    name: "P-224",
    sec_name: "secp224r1",
    p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    g_x: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    g_y: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
    n: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    h: 1,
};

/// NIST P-256
pub const NIST_P256: CurveConstants = CurveConstants {
    name: "P-256",
    sec_name: "secp256r1",
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    g_x: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    g_y: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    h: 1,
};

/// NIST P-384
pub const NIST_P384: CurveConstants = CurveConstants {
    name: "P-384",
    sec_name: "secp384r1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    g_x: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
    g_y: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    n: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    h: 1,
};

/// NIST P-521
pub const NIST_P521: CurveConstants = CurveConstants {
    name: "P-521",
    sec_name: "secp521r1",
    p: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    a: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
    b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    g_x: "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
    g_y: "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
    n: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
    h: 1,
};

/// The five NIST prime curves in increasing security order
pub const ALL_NIST_CURVES: [CurveConstants; 5] =
    [NIST_P192, NIST_P224, NIST_P256, NIST_P384, NIST_P521];
