use std::ops::{Deref, DerefMut};

use crate::error::ChartResult;
use crate::render::DrawingSurface;

/// Keeps a surface pushed as the current context for the guard's lifetime.
///
/// `pop_context` runs on drop, including when a draw inside the scope
/// returned early with an error.
pub struct SurfaceScope<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawingSurface + ?Sized> SurfaceScope<'a, S> {
    pub fn enter(surface: &'a mut S) -> ChartResult<Self> {
        surface.push_context()?;
        Ok(Self { surface })
    }
}

impl<S: DrawingSurface + ?Sized> Deref for SurfaceScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for SurfaceScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for SurfaceScope<'_, S> {
    fn drop(&mut self) {
        self.surface.pop_context();
    }
}

/// Runs `draw` with `surface` pushed as the current context.
pub fn with_surface_scope<S, T>(
    surface: &mut S,
    draw: impl FnOnce(&mut S) -> ChartResult<T>,
) -> ChartResult<T>
where
    S: DrawingSurface + ?Sized,
{
    let mut scope = SurfaceScope::enter(surface)?;
    draw(&mut *scope)
}
