//! MurmurHash2 行键加盐
//!
//! 连续的顶点标识经过哈希后分散到存储的不同区间，避免批量导入集中写入同一区域。

const M: u32 = 0x5bd1e995;
const R: u32 = 24;

/// 行键加盐使用的种子，修改后所有行键都会改变
pub const ROW_KEY_SEED: u32 = 0x4752_4150;

/// 32 位 MurmurHash2，小端读取 4 字节块
pub fn murmurhash2(data: &[u8], seed: u32) -> u32 {
    let mut h = seed ^ data.len() as u32;

    let chunks = data.chunks_exact(4);
    let tail = chunks.remainder();
    for chunk in chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);
        h = h.wrapping_mul(M) ^ k;
    }

    if !tail.is_empty() {
        for (shift, byte) in tail.iter().enumerate().rev() {
            h ^= u32::from(*byte) << (8 * shift);
        }
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^ (h >> 15)
}

pub fn murmurhash2_str(s: &str, seed: u32) -> u32 {
    murmurhash2(s.as_bytes(), seed)
}

/// 顶点标识的行键盐值
pub fn row_key_salt(id: &str) -> u32 {
    murmurhash2_str(id, ROW_KEY_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_with_zero_seed() {
        assert_eq!(murmurhash2(b"", 0), 0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(murmurhash2(b"v1", 42), murmurhash2(b"v1", 42));
        assert_ne!(murmurhash2(b"v1", 42), murmurhash2(b"v1", 43));
        assert_ne!(murmurhash2(b"vertex-100", 0), murmurhash2(b"vertex-101", 0));
    }

    #[test]
    fn test_tail_lengths() {
        let hashes: Vec<u32> = ["abcd", "abcde", "abcdef", "abcdefg"]
            .iter()
            .map(|s| murmurhash2_str(s, 0))
            .collect();
        for i in 0..hashes.len() {
            for j in (i + 1)..hashes.len() {
                assert_ne!(hashes[i], hashes[j]);
            }
        }
    }

    #[test]
    fn test_row_key_salt_uses_fixed_seed() {
        assert_eq!(row_key_salt("v1"), murmurhash2(b"v1", ROW_KEY_SEED));
    }
}
