//! Ring-layout particle field driven by analyser frequency bytes.
//!
//! Particles sit on concentric rings in the XZ plane. Particle `i` belongs to
//! ring `ceil(i / PARTICLES_PER_RING)`, so particle 0 alone forms ring 0 at the
//! centre. Each ring listens to the frequency bin with the same index and is
//! lifted by that bin's magnitude.

use crate::constants::{
    BASE_POINT_SIZE, FIELD_BASE_Y, FIELD_RADIUS, PARTICLES_PER_RING, PARTICLE_COUNT,
    RING_SPACING, SPECTRUM_DIVISOR,
};
use glam::Vec3;

/// One point as uploaded to the GPU instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
}

#[inline]
pub fn ring_of(index: usize) -> usize {
    index.div_ceil(PARTICLES_PER_RING)
}

#[inline]
pub fn ring_distance(ring: usize) -> f32 {
    ring as f32 * RING_SPACING * FIELD_RADIUS
}

#[inline]
pub fn particle_angle(index: usize) -> f32 {
    index as f32 / PARTICLES_PER_RING as f32 * std::f32::consts::TAU
}

/// Point size falls linearly from `BASE_POINT_SIZE` at the centre to zero at `FIELD_RADIUS`.
#[inline]
pub fn size_at(distance: f32) -> f32 {
    BASE_POINT_SIZE * (1.0 - distance / FIELD_RADIUS)
}

/// Lift for a ring given the current spectrum; bins past the end read as silence.
#[inline]
pub fn lift_for(spectrum: &[u8], ring: usize) -> f32 {
    spectrum.get(ring).copied().unwrap_or(0) as f32 / SPECTRUM_DIVISOR
}

pub struct ParticleField {
    instances: Vec<ParticleInstance>,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleField {
    pub fn new() -> Self {
        let mut field = Self {
            instances: vec![ParticleInstance::default(); PARTICLE_COUNT],
        };
        field.apply_spectrum(&[]);
        field
    }

    /// Recompute every particle in place from `spectrum`.
    pub fn apply_spectrum(&mut self, spectrum: &[u8]) {
        for (i, p) in self.instances.iter_mut().enumerate() {
            let ring = ring_of(i);
            let angle = particle_angle(i);
            let distance = ring_distance(ring);
            p.position = [
                angle.cos() * distance,
                FIELD_BASE_Y + lift_for(spectrum, ring),
                angle.sin() * distance,
            ];
            p.size = size_at(distance);
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.instances.get(index).map(|p| Vec3::from_array(p.position))
    }

    pub fn size(&self, index: usize) -> Option<f32> {
        self.instances.get(index).map(|p| p.size)
    }

    /// Number of rings, including the single-particle centre ring.
    pub fn ring_count(&self) -> usize {
        self.instances.len().checked_sub(1).map(ring_of).unwrap_or(0) + 1
    }
}
