use super::*;

#[test]
fn particles_fill_sphere_shell() {
    let chaos = ChaosParticles::new();
    assert_eq!(chaos.particles().len(), PARTICLE_COUNT);
    for p in chaos.particles() {
        let r = p.length();
        assert!(r >= SPHERE_RADIUS * 0.3 - 1e-9 && r <= SPHERE_RADIUS + 1e-9, "radius {r}");
    }
}

#[test]
fn fragments_and_break_lines_have_fixed_counts() {
    let chaos = ChaosParticles::new();
    assert_eq!(chaos.fragments.len(), FRAGMENT_COUNT);
    assert_eq!(chaos.break_lines.len(), BREAK_LINE_COUNT);
}

#[test]
fn stride_start_cycles_through_three_offsets() {
    assert_eq!(ChaosParticles::stride_start(0.0), 0);
    assert_eq!(ChaosParticles::stride_start(0.011), 1);
    assert_eq!(ChaosParticles::stride_start(0.025), 2);
    assert_eq!(ChaosParticles::stride_start(0.031), 0);
}

#[test]
fn tick_updates_only_one_stride() {
    let mut chaos = ChaosParticles::new();
    // floor(0.5 * 100) % 3 == 2
    chaos.tick(0.5, Point::new(5.0, 5.0));
    for (i, (now, orig)) in chaos.current.iter().zip(&chaos.origin).enumerate() {
        if i % 3 == 2 {
            assert_ne!(now, orig, "particle {i} should move");
        } else {
            assert_eq!(now, orig, "particle {i} should stay");
        }
    }
}

#[test]
fn drift_stays_within_amplitude_when_pointer_is_far() {
    let mut chaos = ChaosParticles::new();
    // Pointer far outside the cloud so no repulsion applies.
    chaos.tick(1.7, Point::new(100.0, 100.0));
    for (now, orig) in chaos.current.iter().zip(&chaos.origin) {
        assert!((now.x - orig.x).abs() <= DRIFT_AMPLITUDE + 1e-9);
        assert!((now.y - orig.y).abs() <= DRIFT_AMPLITUDE + 1e-9);
        assert!((now.z - orig.z).abs() <= DRIFT_AMPLITUDE + 1e-9);
    }
}

#[test]
fn pointer_pushes_nearby_particles_away() {
    let mut near = ChaosParticles::new();
    let mut far = ChaosParticles::new();
    near.tick(0.0, Point::new(0.0, 0.0));
    far.tick(0.0, Point::new(100.0, 100.0));

    let mut pushed = 0;
    for (a, b) in near.current.iter().zip(&far.current) {
        let dist_far = (b.x * b.x + b.y * b.y).sqrt();
        if dist_far < REPEL_RADIUS && dist_far > 0.0 {
            let dist_near = (a.x * a.x + a.y * a.y).sqrt();
            assert!(dist_near >= dist_far - 1e-9);
            pushed += 1;
        }
    }
    assert!(pushed > 0);
}

#[test]
fn scene_has_rings_and_all_particles() {
    let mut chaos = ChaosParticles::new();
    chaos.tick(2.0, Point::default());
    let scene = chaos.scene(Theme::Dark);
    assert_eq!(scene.polylines.len(), 3);
    assert_eq!(scene.point_count(), PARTICLE_COUNT);
    assert!(scene.segment_count() >= BREAK_LINE_COUNT + 12);
}
