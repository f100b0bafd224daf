//! Constant-Time Programming Utilities
//!
//! Tag verification and the `GF(2^n)` doubling both run over secret data, neither may branch
//! on it nor exit early.

use core::hint::black_box;

#[inline(always)]
fn volatile(byte: u8) -> u8 {
    // SAFETY: `byte` is a live local, the reference is valid and aligned for the read.
    unsafe { core::ptr::read_volatile(&byte) }
}

#[inline(always)]
fn eq_hsb(xor: u8) -> u8 {
    volatile(xor | volatile(xor.wrapping_neg())) >> 7
}

/// Compare two bytes in constant-time.
///
/// # Returns
///
/// * `0`: `a != b`
/// * `1`: `a == b`
#[inline(always)]
#[must_use]
pub fn byte_eq(a: u8, b: u8) -> u8 {
    // Without the volatile reads LLVM recognizes `(xor | -xor) >> 7` as an inequality and
    // lowers it to `icmp` + `sete`, which is what we are trying to avoid.
    eq_hsb(b ^ a) ^ volatile(1)
}

/// Expands the lowest bit of `bit` into a full byte mask (`0x00` or `0xFF`).
#[inline(always)]
#[must_use]
pub(crate) fn bit_mask(bit: u8) -> u8 {
    // black_box keeps LLVM from rewriting the masked xor which consumes this into a select.
    black_box(0u8.wrapping_sub(bit & 1))
}

/// Compare two slices in constant-time.
///
/// # Note
///
/// If the length of slice `a` and slice `b` are not equivalent, this will exit early. In short,
/// there is variable timing on length comparisons. Lengths are public in every use within this
/// crate (tag lengths are fixed per context).
///
/// # Warning
///
/// Constant-time programming is nuanced, this implementation provides a *best-effort*
/// constant-time equivalence check. There is no guarantee of constant-time properties across
/// all existing hardware.
///
/// # Returns
///
/// * `0`: `a != b`
/// * `1`: `a == b`
#[must_use]
pub fn cmp_slice(a: &[u8], b: &[u8]) -> u8 {
    if a.len() != b.len() { return 0 }

    let mut res = volatile(1u8);

    for (left, right) in a.iter().zip(b) {
        res &= byte_eq(*left, *right);
    }

    res
}

/// Compare two slices in constant-time.
///
/// # Arguments
///
/// The two arguments being compared in constant-time, both of these arguments must implement
/// `AsRef<[u8]>` (such as `&str`, `&[u8]` itself, etc.)
///
/// # Note
///
/// Lengths are compared in variable time, see [`cmp_slice`].
///
/// # Returns
///
/// `true` if `a == b`, `false` otherwise.
#[must_use]
pub fn ct_eq<A: AsRef<[u8]>, B: AsRef<[u8]>>(a: A, b: B) -> bool {
    cmp_slice(a.as_ref(), b.as_ref()) != 0
}
