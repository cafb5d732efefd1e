// =============================================================================
// Capability Probe
// =============================================================================
//
// Whether the processor executes POPCNT, resolved once per process and cached
// in a write-once atomic. Resolution is idempotent, so a race between two
// first readers stores the same value twice.

use core::sync::atomic::{AtomicU8, Ordering};

const UNRESOLVED: u8 = 0;
const ABSENT: u8 = 1;
const PRESENT: u8 = 2;

static POPCNT_CAPABILITY: AtomicU8 = AtomicU8::new(UNRESOLVED);

/// How [`popcount`](super::popcount) counts bits in this process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PopcountStrategy {
    /// The POPCNT instruction (x86-64 with SSE4.2-era hardware).
    Hardware,
    /// Sum of per-byte lookups in [`BITS_SET_IN_BYTE`](super::BITS_SET_IN_BYTE).
    Table,
}

impl PopcountStrategy {
    /// Returns the strategy for this process, probing the CPU on first use.
    ///
    /// Always [`Table`](Self::Table) when built with `portable-popcount`.
    #[inline(always)]
    pub fn current() -> Self {
        if cfg!(feature = "portable-popcount") {
            return Self::Table;
        }
        if is_popcnt_supported() {
            Self::Hardware
        } else {
            Self::Table
        }
    }

    /// Short lowercase name, for logs and benchmark labels.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Table => "table",
        }
    }
}

/// Returns whether the executing processor supports POPCNT.
///
/// The first call probes the CPU; later calls read the cached flag.
#[inline(always)]
pub fn is_popcnt_supported() -> bool {
    match POPCNT_CAPABILITY.load(Ordering::Relaxed) {
        PRESENT => true,
        ABSENT => false,
        _ => resolve_popcnt(),
    }
}

/// Resolves the capability flag now instead of on first use.
///
/// Call during startup to keep the probe off the code generation path.
/// Calling it again has no effect.
pub fn init() {
    let _ = is_popcnt_supported();
}

#[cold]
#[inline(never)]
fn resolve_popcnt() -> bool {
    let present = probe_popcnt();
    POPCNT_CAPABILITY.store(if present { PRESENT } else { ABSENT }, Ordering::Relaxed);
    log::debug!(
        "POPCNT {}; population count uses the {} strategy",
        if present { "available" } else { "unavailable" },
        PopcountStrategy::current().name()
    );
    present
}

#[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
fn probe_popcnt() -> bool {
    true
}

#[cfg(all(target_arch = "x86_64", not(target_feature = "popcnt")))]
fn probe_popcnt() -> bool {
    raw_cpuid::CpuId::new()
        .get_feature_info()
        .is_some_and(|info| info.has_popcnt())
}

#[cfg(not(target_arch = "x86_64"))]
fn probe_popcnt() -> bool {
    false
}
