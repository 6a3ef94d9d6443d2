/// A drawable element with a displayed (CSS) size and a backing store size.
pub trait DisplaySurface {
    fn display_size(&self) -> (u32, u32);
    fn backing_size(&self) -> (u32, u32);
    fn set_backing_size(&mut self, width: u32, height: u32);
}

/// Match the backing store to the displayed size. Returns `true` when the
/// backing store changed.
pub fn resize_to_display_size<S: DisplaySurface + ?Sized>(surface: &mut S) -> bool {
    let (display_w, display_h) = surface.display_size();
    if surface.backing_size() == (display_w, display_h) {
        return false;
    }
    surface.set_backing_size(display_w, display_h);
    log::info!("Resized canvas to {}x{}", display_w, display_h);
    true
}
