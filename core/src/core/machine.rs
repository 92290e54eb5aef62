/// Machine-agnostic interface for the frontend driver.
///
/// The frontend is a pure rendering/harness layer that does not know about
/// CPU registers, bus decode, or VERA register semantics — it only calls
/// through this trait, exactly the role `core::machine::Machine` plays in
/// the teacher repo for arcade boards.
pub trait Machine {
    /// Native display resolution as (width, height) in pixels.
    fn display_size(&self) -> (u32, u32);

    /// Run one frame's worth of CPU/video/PS2 stepping.
    fn run_frame(&mut self);

    /// Render the current video state into an RGB24 pixel buffer.
    ///
    /// The buffer must be at least `width * height * 3` bytes (from
    /// `display_size()`). Pixels are stored left-to-right, top-to-bottom,
    /// 3 bytes per pixel (R, G, B).
    fn render_frame(&self, buffer: &mut [u8]);

    /// Reset the machine to its initial power-on state.
    fn reset(&mut self);
}
