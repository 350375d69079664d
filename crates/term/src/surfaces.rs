//! Named surfaces the host prepares for games to draw on.
//!
//! A game's config names the surface it wants; the engine looks it up here
//! at startup. A missing id is the one fatal lookup in the system, so the
//! registry hands out owned surfaces rather than shared references.

use std::collections::HashMap;

use crate::surface::Surface;

#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Surface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface under `id`, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<String>, surface: Surface) {
        self.surfaces.insert(id.into(), surface);
    }

    /// Take ownership of the surface registered under `id`.
    pub fn take(&mut self, id: &str) -> Option<Surface> {
        self.surfaces.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }
}
