use std::ptr;

trait Probe {
    fn probe(&self) -> usize {
        1
    }
}

struct Payload(usize);

impl Probe for Payload {}

/// Two-word view of a fat pointer: address first, metadata second.
#[repr(C)]
struct RawParts {
    addr: *const u8,
    extra: usize,
}

fn layout_broken(what: &str) -> ! {
    panic!(
        concat!(
            "The stable metadata-splicing fallback assumes the `unsafe code ",
            "guidelines` layout for fat pointers, and the layout of {:?} no ",
            "longer matches it. Build with the `nightly` feature instead, ",
            "and report this on the issue tracker."
        ),
        what
    );
}

/// Checks that both fat pointer kinds keep the data address in the first
/// word, which is what `src/sptr.rs` rewrites on stable:
///
/// 1. trait objects: (data, vtable)
/// 2. slices: (data, length)
fn check_fat_pointer_layout() {
    {
        let payload = Box::into_raw(Box::new(Payload(7)));
        let object: *const dyn Probe = payload;
        let parts: RawParts = unsafe { ptr::read(ptr::addr_of!(object).cast::<RawParts>()) };

        if parts.addr != payload as *const u8 {
            layout_broken("trait objects");
        }

        let payload = unsafe { Box::from_raw(payload) };
        payload.probe();
    }

    {
        let array = [1u8, 2, 3];
        let slice: *const [u8] = &array[..];
        let parts: RawParts = unsafe { ptr::read(ptr::addr_of!(slice).cast::<RawParts>()) };

        if parts.addr != array.as_ptr() || parts.extra != array.len() {
            layout_broken("slices");
        }
    }
}

fn main() {
    // NOTE: host layout is assumed to match target layout here; a cross
    // build with a disagreeing target would not be caught.
    check_fat_pointer_layout();
}
