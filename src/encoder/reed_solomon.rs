/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::encoder::gf256::Gf256;

/// Generator polynomial prod_{i<n} (x - alpha^i), coefficients from the
/// highest degree down; the leading coefficient is always 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolynomial {
    coefficients: Vec<u8>,
}

impl GeneratorPolynomial {
    pub fn new(ec_len: usize) -> Self {
        let mut g = vec![0u8; ec_len + 1];
        g[0] = 1;
        for i in 0..ec_len {
            let root = Gf256::exp(i);
            // Multiply by (x + root), high index first so g[j - 1] is still the old value
            g[i + 1] = Gf256::mul(g[i], root);
            for j in (1..=i).rev() {
                g[j] ^= Gf256::mul(g[j - 1], root);
            }
        }
        Self { coefficients: g }
    }

    /// Number of EC codewords this generator produces
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Coefficients as powers of alpha, highest degree first
    pub fn exponents(&self) -> Vec<u8> {
        self.coefficients.iter().map(|&c| Gf256::log(c)).collect()
    }

    /// EC codewords for one data block: the remainder of
    /// data(x) * x^n divided by the generator, computed with a shift register.
    pub fn encode_block(&self, data: &[u8]) -> Vec<u8> {
        let ec_len = self.degree();
        let mut register = vec![0u8; ec_len];
        if ec_len == 0 {
            return register;
        }
        for &byte in data {
            let feedback = byte ^ register[0];
            register.copy_within(1.., 0);
            register[ec_len - 1] = 0;
            if feedback != 0 {
                for (r, &g) in register.iter_mut().zip(&self.coefficients[1..]) {
                    *r ^= Gf256::mul(feedback, g);
                }
            }
        }
        register
    }
}

/// Remainder of `codeword` divided by `generator` (long division, highest
/// degree first). All zero for a valid data||ec codeword.
pub fn poly_remainder(codeword: &[u8], generator: &GeneratorPolynomial) -> Vec<u8> {
    let g = generator.coefficients();
    let degree = generator.degree();
    let mut rem = codeword.to_vec();
    if rem.len() < g.len() {
        return rem;
    }
    for i in 0..=(rem.len() - g.len()) {
        let factor = rem[i];
        if factor != 0 {
            for (j, &coeff) in g.iter().enumerate() {
                rem[i + j] ^= Gf256::mul(coeff, factor);
            }
        }
    }
    rem.split_off(rem.len() - degree)
}
