//! Stable seeds from calendar date keys

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a date key such as `"2024-01-01"` into a 32-bit seed
///
/// 32-bit FNV-1a over the UTF-16 code units of the key. Pure integer
/// arithmetic, so the same key gives the same seed on every platform.
///
/// # Examples
/// ```
/// use neonword::puzzle::daily_seed;
///
/// assert_eq!(daily_seed("2024-01-01"), daily_seed("2024-01-01"));
/// assert_ne!(daily_seed("2024-01-01"), daily_seed("2024-01-02"));
/// ```
#[must_use]
pub fn daily_seed(key: &str) -> u32 {
    key.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}
