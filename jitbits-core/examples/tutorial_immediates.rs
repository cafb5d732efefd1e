//! # Tutorial: Choosing Immediate Widths
//!
//! x86-64 offers several encodings for most arithmetic instructions with a
//! constant operand. `add r/m64, imm8` is three bytes shorter than
//! `add r/m64, imm32`, but the imm8 form sign-extends its operand. This
//! example shows how an encoder uses `size` to pick the shortest valid form.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_immediates
//! ```

use jitbits_core::{size, EncodingWidth};

/// Encoding forms of `add r/m64, imm`.
fn add_form(imm: i64) -> &'static str {
    match EncodingWidth::of(imm) {
        EncodingWidth::Implicit => "(no-op, elided)",
        EncodingWidth::Byte => "add r/m64, imm8    (REX.W 83 /0 ib)",
        EncodingWidth::Word | EncodingWidth::Dword => "add r/m64, imm32   (REX.W 81 /0 id)",
        EncodingWidth::Qword => "mov r64, imm64 + add r/m64, r64",
    }
}

fn main() {
    println!();
    println!("    {:>22}  bytes  form", "immediate");
    println!("    {:>22}  -----  ----", "---------");

    let samples: [i64; 9] = [
        0,
        1,
        -1,
        127,
        128,
        -129,
        0x7fff_ffff,
        -0x8000_0001,
        i64::MIN,
    ];
    for imm in samples {
        println!("    {:>22}  {:>5}  {}", imm, size(imm), add_form(imm));
    }
    println!();

    // Unsigned displacements and masks are zero-extended instead
    println!("    {:>22}  bytes", "unsigned");
    for mask in [0xffu64, 0x100, 0xffff_ffff, 0x1_0000_0000] {
        println!("    {:>22x}  {:>5}", mask, size(mask));
    }
    println!();
}
