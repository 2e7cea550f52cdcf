use std::fmt::Write;

use swifft_core::pattern::{patterned_block, patterned_bytes};
use swifft_core::{compute, compute_signed, SignBlock, INPUT_BLOCK_SIZE};

fn main() {
    let block = patterned_block(11, 7);

    let hash = compute(&block);
    println!("SWIFFT hash (hex):        {}", to_hex(&hash.to_bytes()));

    let sign = SignBlock(patterned_bytes::<INPUT_BLOCK_SIZE>(0, 0xFF));
    let signed = compute_signed(&block, &sign);
    println!("SWIFFT signed hash (hex): {}", to_hex(&signed.to_bytes()));
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
