/// The slice of the multimedia library the smoke check consumes.
///
/// `init_video` brings up the video subsystem and reports the library's own
/// error text on failure. `shutdown` releases whatever `init_video` acquired
/// and is only expected to be called after a successful `init_video`.
pub trait MediaLibrary {
    fn init_video(&mut self) -> Result<(), String>;
    fn shutdown(&mut self);
}

impl<L: MediaLibrary + ?Sized> MediaLibrary for &mut L {
    fn init_video(&mut self) -> Result<(), String> {
        (**self).init_video()
    }

    fn shutdown(&mut self) {
        (**self).shutdown()
    }
}
