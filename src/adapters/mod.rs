// Adapters layer: concrete implementations of the domain ports.

#[cfg(feature = "sdl")]
pub mod sdl;
