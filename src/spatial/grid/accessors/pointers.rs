use super::super::*;

impl Grid {
    // === Raw pointer for JS interop ===
    // `Cell` is `repr(u8)`, so JS can view the backing array as a Uint8Array.
    pub fn cells_ptr(&self) -> *const u8 {
        self.data.as_ptr() as *const u8
    }
}
