use rand::Rng;
use serde::{Deserialize, Serialize};

const COUPON_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const COUPON_LEN: usize = 6;

/// Cosmetic receipt numbers. They carry no meaning and change on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorativeCodes {
    pub order_number: u32,
    pub coupon_code: String,
    pub auth_code: u32,
}

impl DecorativeCodes {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let coupon_code = (0..COUPON_LEN)
            .map(|_| COUPON_ALPHABET[rng.gen_range(0..COUPON_ALPHABET.len())] as char)
            .collect();

        Self {
            order_number: rng.gen_range(10_000..=99_999),
            coupon_code,
            auth_code: rng.gen_range(100_000..=999_999),
        }
    }
}
