//! Construction-time options for a CPU instance.

use typed_builder::TypedBuilder;

use crate::BrkVector;

/// Power-on SP value.
pub const SP_INIT: u8 = 0xFD;

/// Power-on PC value. The reset vector is not followed automatically; a host
/// calls `rst()` to vector through it.
pub const PC_INIT: u16 = 0xFFFC;

/// CPU options.
///
/// ```
/// use cpu2a03::{BrkVector, CpuConfig};
///
/// let config = CpuConfig::builder().brk_vector(BrkVector::Irq).build();
/// assert_eq!(config.brk_vector, BrkVector::Irq);
/// assert_eq!(config.initial_sp, 0xFD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    /// Vector BRK jumps through.
    #[builder(default = BrkVector::Nmi)]
    pub brk_vector: BrkVector,
    /// SP after construction and `reset()`.
    #[builder(default = SP_INIT)]
    pub initial_sp: u8,
    /// PC after construction and `reset()`.
    #[builder(default = PC_INIT)]
    pub initial_pc: u16,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
