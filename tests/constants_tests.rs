// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so these go through pulse-core.

use pulse_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLES_PER_RING > 0);
    assert!(FIELD_RADIUS > 0.0);
    assert!(RING_SPACING > 0.0 && RING_SPACING < 1.0);
    assert!(BASE_POINT_SIZE > 0.0);
    assert!(SPECTRUM_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn outermost_ring_stays_inside_the_field() {
    let last_ring = ring_of(PARTICLE_COUNT - 1);
    assert!(ring_distance(last_ring) < FIELD_RADIUS);
    // so every point keeps a positive size
    assert!(size_at(ring_distance(last_ring)) > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn loudest_bin_lifts_less_than_one_unit() {
    assert!(255.0 / SPECTRUM_DIVISOR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_fft_gives_enough_bins_for_every_ring() {
    assert!(DEFAULT_FFT_SIZE.is_power_of_two());
    assert!(MIN_FFT_SIZE <= DEFAULT_FFT_SIZE && DEFAULT_FFT_SIZE <= MAX_FFT_SIZE);
    let bins = (DEFAULT_FFT_SIZE / 2) as usize;
    assert!(bins >= ParticleField::new().ring_count());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_have_logical_relationships() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_Z > CAMERA_ZNEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_constants_are_sane() {
    assert!(ALERT_HIDE_DELAY_MS > 0);
    assert_eq!(AUDIO_NOT_FOUND, "Audio not found");
    assert_eq!(UPLOAD_ACCEPT, ".mp3");
    assert!(POINT_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}
