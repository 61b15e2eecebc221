//! Animated night sky rendered to a browser canvas.
//!
//! Hundreds of small five-pointed stars drift rightward and twinkle over a
//! black background. Every few seconds a random cluster of nearby stars is
//! joined into a faint "constellation" polyline that fades out, and a radial
//! vignette darkens the edges.
//!
//! The crate is compiled to WebAssembly. All scene logic runs against the
//! [`surface::Surface`] and [`animator::FrameScheduler`] traits, so it is
//! tested natively with [`recording::RecordingSurface`] and
//! [`animator::ManualScheduler`]; [`web`] supplies the browser versions.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | [`scene::SceneCore`]: scene state and the per-frame update |
//! | [`animator`] | Frame loop with start/stop over an injectable scheduler |
//! | [`star`] | Star motion, twinkle, wrapping and outline |
//! | [`constellation`] | Selecting, fading and stroking constellations |
//! | [`surface`] | Drawing-surface trait and gradient types |
//! | [`recording`] | Surface that records calls, for tests |
//! | [`canvas2d`] | Surface over `CanvasRenderingContext2d` |
//! | [`web`] | `requestAnimationFrame` scheduler and the JS-facing `NightSky` |
//! | [`config`] | JSON-configurable scene parameters |
//! | [`geom`] | Points, viewport and selection box |
//! | [`consts`] | Shared numeric and color constants |

pub mod animator;
pub mod canvas2d;
pub mod config;
pub mod consts;
pub mod constellation;
pub mod geom;
pub mod recording;
pub mod scene;
pub mod star;
pub mod surface;
pub mod web;
