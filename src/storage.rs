//! Raw payload storage: a fixed inline buffer unioned with a heap pointer.
//!
//! The union does no bookkeeping of its own. Which branch is live, and for
//! which payload type, is tracked by the dispatch table one layer up; every
//! accessor here takes the payload type as a generic parameter and derives
//! the branch from [`fits_inline`] alone.

use core::mem;
use core::mem::MaybeUninit;
use core::ptr::{addr_of, addr_of_mut};

use alloc::boxed::Box;

/// Compile-time inline/heap decision for a payload type in a given space.
///
/// The alignment clause routes over-aligned payloads to the heap; without
/// it an inline write could land misaligned.
pub(crate) const fn fits_inline<U, Space>() -> bool {
    mem::size_of::<U>() <= mem::size_of::<Space>()
        && mem::align_of::<U>() <= mem::align_of::<Space>()
}

pub(crate) union RawStorage<Space> {
    inline: MaybeUninit<Space>,
    heap: *mut u8,
}

impl<Space> RawStorage<Space> {
    /// Storage holding no payload. The bits are uninitialized; callers must
    /// not touch either branch until after `emplace`.
    pub(crate) const fn dead() -> Self {
        RawStorage {
            inline: MaybeUninit::uninit(),
        }
    }

    /// Constructs `value` in the branch chosen by [`fits_inline`].
    ///
    /// # Safety
    ///
    /// The storage must not currently hold a live payload.
    pub(crate) unsafe fn emplace<U>(&mut self, value: U) {
        if fits_inline::<U, Space>() {
            addr_of_mut!(self.inline).cast::<U>().write(value);
        } else {
            self.heap = Box::into_raw(Box::new(value)).cast::<u8>();
        }
    }

    /// Address of the live payload, assumed to be a `U`.
    ///
    /// # Safety
    ///
    /// The storage must hold a live payload emplaced as `U` with the same
    /// `Space`.
    pub(crate) unsafe fn payload<U>(&self) -> *const u8 {
        if fits_inline::<U, Space>() {
            addr_of!(self.inline).cast::<u8>()
        } else {
            self.heap
        }
    }

    /// Mutable address of the live payload, assumed to be a `U`.
    ///
    /// # Safety
    ///
    /// Same contract as [`RawStorage::payload`].
    pub(crate) unsafe fn payload_mut<U>(&mut self) -> *mut u8 {
        if fits_inline::<U, Space>() {
            addr_of_mut!(self.inline).cast::<u8>()
        } else {
            self.heap
        }
    }
}
