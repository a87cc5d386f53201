//! Global allocator.
//!
//! mimalloc handles the short-lived buffers of whole-file encryption (input,
//! padded copy, ciphertext, frame) faster than the system allocator.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
