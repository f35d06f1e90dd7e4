//! Constant-time comparison of derived keys.

use subtle::ConstantTimeEq;

use crate::types::KEY_LENGTH;

/// Compare two derived keys without short-circuiting.
///
/// Every byte pair is XORed and OR-accumulated before the accumulator is
/// tested, so the work done does not depend on where a mismatch occurs.
pub fn keys_match(stored: &[u8; KEY_LENGTH], candidate: &[u8; KEY_LENGTH]) -> bool {
    let diff = accumulate_diff(stored, candidate, |_| {});
    diff.ct_eq(&0u8).into()
}

/// OR of the byte-wise XORs. `visit` is called with each inspected index.
fn accumulate_diff(
    stored: &[u8; KEY_LENGTH],
    candidate: &[u8; KEY_LENGTH],
    mut visit: impl FnMut(usize),
) -> u8 {
    let mut acc = 0u8;
    for (i, (a, b)) in stored.iter().zip(candidate.iter()).enumerate() {
        visit(i);
        acc |= a ^ b;
    }
    std::hint::black_box(acc)
}
