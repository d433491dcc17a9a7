//! Drifting glyph backdrop.
//!
//! A [`ParticleField`] owns a fixed set of [`Particle`]s and the current
//! surface size. Each tick clears the surface, then updates and draws every
//! particle in order. Drawing goes through [`GlyphSurface`] so the field
//! does not know about canvases.

use crate::constants::*;
use crate::theme::Theme;
use glam::DVec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl Rgba {
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }
}

/// Something a particle can render a glyph onto.
pub trait GlyphSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_glyph(&mut self, glyph: char, center: DVec2, size: f64, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drift {
    Left,
    Right,
}

impl Drift {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Drift::Left => -1.0,
            Drift::Right => 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub speed: f64,
    pub drift: Drift,
    pub glyph: char,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bounds: DVec2) -> Self {
        let mut p = Self {
            pos: DVec2::ZERO,
            speed: PARTICLE_SPEED_MIN,
            drift: Drift::Right,
            glyph: PARTICLE_GLYPHS[0],
            size: PARTICLE_SIZE_MIN,
            opacity: PARTICLE_OPACITY_MIN,
        };
        p.reset(rng, bounds);
        p
    }

    /// Re-randomize every attribute and place the particle on the bottom edge.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: DVec2) {
        self.pos = DVec2::new(rng.gen::<f64>() * bounds.x, bounds.y);
        self.speed = PARTICLE_SPEED_MIN + rng.gen::<f64>() * PARTICLE_SPEED_SPAN;
        self.glyph = PARTICLE_GLYPHS[rng.gen_range(0..PARTICLE_GLYPHS.len())];
        self.size = PARTICLE_SIZE_MIN + rng.gen::<f64>() * PARTICLE_SIZE_SPAN;
        self.opacity = PARTICLE_OPACITY_MIN + rng.gen::<f64>() * PARTICLE_OPACITY_SPAN;
        self.drift = if rng.gen_bool(0.5) {
            Drift::Right
        } else {
            Drift::Left
        };
    }

    /// Move one frame up. Leaving the top edge recycles the particle below
    /// the bottom edge; only its position changes.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: DVec2) {
        self.pos.y -= self.speed;
        self.pos.x += self.drift.sign() * PARTICLE_DRIFT_STEP;
        if self.pos.y < -PARTICLE_RECYCLE_MARGIN {
            self.pos.y = bounds.y + PARTICLE_RECYCLE_MARGIN;
            self.pos.x = rng.gen::<f64>() * bounds.x;
        }
    }

    /// Light theme picks one of two tones on every call, so a particle
    /// flickers between them frame to frame.
    pub fn fill_color<R: Rng + ?Sized>(&self, theme: Theme, rng: &mut R) -> Rgba {
        let rgb = match theme {
            Theme::Dark => DARK_GLYPH_RGB,
            Theme::Light => LIGHT_GLYPH_RGB[usize::from(rng.gen_bool(0.5))],
        };
        Rgba {
            rgb,
            alpha: self.opacity,
        }
    }

    pub fn draw<S, R>(&self, surface: &mut S, theme: Theme, rng: &mut R)
    where
        S: GlyphSurface + ?Sized,
        R: Rng + ?Sized,
    {
        let color = self.fill_color(theme, rng);
        surface.fill_glyph(self.glyph, self.pos, self.size, color);
    }
}

pub struct ParticleField<R: Rng = StdRng> {
    particles: Vec<Particle>,
    bounds: DVec2,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(count: usize, width: f64, height: f64, mut rng: R) -> Self {
        let bounds = DVec2::new(width, height);
        let particles = (0..count)
            .map(|_| Particle::new(&mut rng, bounds))
            .collect();
        Self {
            particles,
            bounds,
            rng,
        }
    }

    /// Track a new surface size. Existing particles keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = DVec2::new(width, height);
    }

    pub fn tick<S: GlyphSurface + ?Sized>(&mut self, surface: &mut S, theme: Theme) {
        surface.clear(self.bounds.x, self.bounds.y);
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.update(&mut self.rng, bounds);
            p.draw(surface, theme, &mut self.rng);
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.bounds.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bounds.y
    }
}

/// CSS font shorthand for a glyph of `size` px.
pub fn glyph_font(size: f64) -> String {
    format!(
        "{} {}px \"{}\"",
        PARTICLE_FONT_WEIGHT, size, PARTICLE_FONT_FAMILY
    )
}
