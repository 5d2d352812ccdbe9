//! Per-payload-type dispatch tables.
//!
//! One table exists per (payload type, space) pair the program actually
//! boxes. Tables are materialized by const promotion, so they carry the
//! `'static` lifetime, are written exactly once, and are shared read-only
//! between every holder of that payload type, the same properties a
//! function-local static would give, with no runtime initialization.
//!
//! The operations assume the caller already knows the storage state:
//! `clone` requires dead destination storage, `clone_assign` requires a
//! live destination of the identical payload type. The container upholds
//! these preconditions; the table never re-checks them.

use core::any::TypeId;
use core::mem;

use alloc::boxed::Box;

use crate::storage::{fits_inline, RawStorage};

pub(crate) struct PolyVTable<Space> {
    /// Identity token of the payload type. Tables are compared through
    /// this, never by address: const promotion may merge or duplicate
    /// table instances across codegen units.
    pub(crate) type_of: fn() -> TypeId,
    pub(crate) size: usize,
    pub(crate) on_heap: bool,
    pub(crate) data: unsafe fn(&RawStorage<Space>) -> *const u8,
    pub(crate) data_mut: unsafe fn(&mut RawStorage<Space>) -> *mut u8,
    pub(crate) destroy: unsafe fn(&mut RawStorage<Space>),
    pub(crate) clone: unsafe fn(&RawStorage<Space>, &mut RawStorage<Space>),
    pub(crate) clone_assign: unsafe fn(&RawStorage<Space>, &mut RawStorage<Space>),
}

pub(crate) fn table_of<U: Clone + 'static, Space>() -> &'static PolyVTable<Space> {
    const {
        &PolyVTable {
            type_of: TypeId::of::<U>,
            size: mem::size_of::<U>(),
            on_heap: !fits_inline::<U, Space>(),
            data: data::<U, Space>,
            data_mut: data_mut::<U, Space>,
            destroy: destroy::<U, Space>,
            clone: clone_into::<U, Space>,
            clone_assign: clone_assign::<U, Space>,
        }
    }
}

unsafe fn data<U, Space>(storage: &RawStorage<Space>) -> *const u8 {
    storage.payload::<U>()
}

unsafe fn data_mut<U, Space>(storage: &mut RawStorage<Space>) -> *mut u8 {
    storage.payload_mut::<U>()
}

unsafe fn destroy<U, Space>(storage: &mut RawStorage<Space>) {
    if fits_inline::<U, Space>() {
        storage.payload_mut::<U>().cast::<U>().drop_in_place();
    } else {
        drop(Box::from_raw(storage.payload_mut::<U>().cast::<U>()));
    }
}

unsafe fn clone_into<U: Clone, Space>(src: &RawStorage<Space>, dst: &mut RawStorage<Space>) {
    let source = &*src.payload::<U>().cast::<U>();
    dst.emplace(source.clone());
}

unsafe fn clone_assign<U: Clone, Space>(src: &RawStorage<Space>, dst: &mut RawStorage<Space>) {
    let source = &*src.payload::<U>().cast::<U>();
    let target = &mut *dst.payload_mut::<U>().cast::<U>();
    target.clone_from(source);
}
