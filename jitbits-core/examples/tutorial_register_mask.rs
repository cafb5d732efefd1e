//! # Tutorial: Register Masks as Bitmaps
//!
//! This example walks through the way a register allocator drives the
//! bit-vector primitives on the 16 general purpose registers of x86-64.
//!
//! ## What You'll Learn
//!
//! 1. **Free masks**: One bit per register, 1 = available
//! 2. **Scanning**: `lowest_set_bit` picks the lowest-numbered free register
//! 3. **Claiming and releasing**: `test_and_clear_bit` / `test_and_set_bit`
//!    commit a decision and report what the bit held before
//! 4. **Counting pressure**: `popcount` says how many registers remain
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_register_mask
//! ```

use jitbits_core::{
    highest_set_bit, lowest_set_bit, popcount, test_and_clear_bit, test_and_set_bit, test_bit,
    PopcountStrategy, WordBitmap,
};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Register names indexed by their encoding number.
const GPR_NAMES: [&str; 16] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14", "r15",
];

/// Registers the allocator may hand out: everything except RSP and RBP.
const ALLOCATABLE: u32 = 0xFFFF & !(1 << 4) & !(1 << 5);

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Prints a mask as a row of register names.
fn print_mask(label: &str, mask: u32) {
    let names: Vec<&str> = WordBitmap::from_word(mask)
        .iter()
        .map(|r| GPR_NAMES[r as usize])
        .collect();
    println!("    {:<10} {:#06x}  [{}]", label, mask, names.join(", "));
}

/// Claims the lowest free register, if any.
fn claim(free: &mut u32) -> Option<u32> {
    let reg = lowest_set_bit(*free)?;
    let was_free = test_and_clear_bit(free, reg);
    debug_assert!(was_free);
    Some(reg)
}

/// Returns a register to the free mask.
fn release(free: &mut u32, reg: u32) {
    let was_free = test_and_set_bit(free, reg);
    assert!(!was_free, "double release of {}", GPR_NAMES[reg as usize]);
}

// =============================================================================
// MAIN
// =============================================================================

fn main() {
    jitbits_core::init();
    println!();
    println!("    Population count strategy: {}", PopcountStrategy::current().name());
    println!();

    let mut free = ALLOCATABLE;
    print_mask("free", free);
    println!("    {} registers available", popcount(free));
    println!();

    // Step 1: allocate three temporaries
    let mut claimed = Vec::new();
    for _ in 0..3 {
        let reg = claim(&mut free).expect("registers available");
        println!("    claim  -> {}", GPR_NAMES[reg as usize]);
        claimed.push(reg);
    }
    print_mask("free", free);
    println!();

    // Step 2: the highest free register is the last resort before spilling
    if let Some(reg) = highest_set_bit(free) {
        println!("    highest free register: {}", GPR_NAMES[reg as usize]);
    }
    println!();

    // Step 3: release the middle one; the next claim reuses it
    let middle = claimed[1];
    release(&mut free, middle);
    println!("    release {}", GPR_NAMES[middle as usize]);
    assert!(test_bit(free, middle));
    let reused = claim(&mut free).expect("registers available");
    println!("    claim  -> {} (reused)", GPR_NAMES[reused as usize]);
    assert_eq!(reused, middle);
    println!();

    print_mask("free", free);
    println!("    {} registers available", popcount(free));
    println!();
}
