// Host-side tests for snake motion, trails and drawing.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snakebg_core::*;

fn theme(intensity: Intensity, style: Style) -> Theme {
    Theme::resolve(&BackgroundConfig::new(intensity, ColorTheme::Gray, style))
}

#[test]
fn trails_are_fully_seeded_and_keep_their_length() {
    let mut rng = StdRng::seed_from_u64(7);
    let vp = Viewport::new(800.0, 600.0);
    let t = theme(Intensity::High, Style::Modern);
    let mut pool = SnakePool::seed(&mut rng, &t, vp);
    assert_eq!(pool.len(), 8);
    for _ in 0..500 {
        for s in pool.snakes() {
            assert_eq!(s.len(), t.trail_length);
        }
        pool.update(&mut rng, vp, 1.0);
    }
}

#[test]
fn seeded_trail_is_stacked_behind_the_head() {
    let s = Snake::with_start(Vec2::new(100.0, 50.0), Heading::Right, 60.0, 1.0, 4.0, 5);
    let xs: Vec<f32> = s.segments().map(|seg| seg.pos.x).collect();
    assert_eq!(xs, vec![100.0, 96.0, 92.0, 88.0, 84.0]);
    assert!(s.segments().all(|seg| seg.pos.y == 50.0));
}

#[test]
fn opacity_and_radius_fade_from_head_to_tail() {
    let mut rng = StdRng::seed_from_u64(11);
    let vp = Viewport::new(800.0, 600.0);
    let t = theme(Intensity::Medium, Style::Modern);
    let mut pool = SnakePool::seed(&mut rng, &t, vp);
    for _ in 0..200 {
        pool.update(&mut rng, vp, 1.0);
        for s in pool.snakes() {
            let segs: Vec<Segment> = s.segments().copied().collect();
            for pair in segs.windows(2) {
                assert!(pair[0].opacity >= pair[1].opacity);
                assert!(pair[0].radius >= pair[1].radius);
            }
            assert!((segs[0].opacity - 0.8).abs() < 1e-6);
            assert!(segs.iter().all(|seg| (0.0..=1.0).contains(&seg.opacity)));
        }
    }
}

#[test]
fn derived_values_stay_valid_for_degenerate_lengths() {
    for len in [0, 1, 2] {
        for i in 0..4 {
            let o = segment_opacity(i, len);
            assert!((0.0..=1.0).contains(&o), "len={len} i={i} opacity={o}");
            assert!(segment_radius(5.0, i, len) >= 0.0);
        }
    }
}

#[test]
fn head_wraps_to_opposite_margin_on_every_edge() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(wrap_head(Vec2::new(851.0, 300.0), vp), Vec2::new(-50.0, 300.0));
    assert_eq!(wrap_head(Vec2::new(-51.0, 300.0), vp), Vec2::new(850.0, 300.0));
    assert_eq!(wrap_head(Vec2::new(400.0, 651.0), vp), Vec2::new(400.0, -50.0));
    assert_eq!(wrap_head(Vec2::new(400.0, -51.0), vp), Vec2::new(400.0, 650.0));
    // Inside the margin nothing happens.
    assert_eq!(wrap_head(Vec2::new(849.0, -49.0), vp), Vec2::new(849.0, -49.0));
}

#[test]
fn moving_snake_wraps_with_y_unchanged() {
    let mut rng = StdRng::seed_from_u64(3);
    let vp = Viewport::new(800.0, 600.0);
    let mut s = Snake::with_start(Vec2::new(850.0, 123.0), Heading::Right, 1000.0, 2.0, 4.0, 10);
    s.update(&mut rng, vp, 1.0);
    assert_eq!(s.head(), Vec2::new(-50.0, 123.0));
    assert_eq!(s.len(), 10);
}

#[test]
fn heading_changes_only_when_countdown_expires() {
    let mut rng = StdRng::seed_from_u64(5);
    let vp = Viewport::new(800.0, 600.0);
    let mut s = Snake::with_start(Vec2::new(400.0, 300.0), Heading::Right, 3.0, 1.0, 4.0, 10);
    s.update(&mut rng, vp, 1.0);
    s.update(&mut rng, vp, 1.0);
    assert_eq!(s.heading(), Heading::Right);
    assert!((s.countdown() - 1.0).abs() < 1e-6);
    s.update(&mut rng, vp, 1.0);
    assert!(
        (60.0..=180.0).contains(&s.countdown()),
        "countdown reset to {}",
        s.countdown()
    );
}

#[test]
fn head_advances_by_heading_times_speed() {
    let mut rng = StdRng::seed_from_u64(1);
    let vp = Viewport::new(800.0, 600.0);
    let mut s = Snake::with_start(Vec2::new(400.0, 300.0), Heading::DownLeft, 100.0, 2.0, 4.0, 10);
    s.update(&mut rng, vp, 1.0);
    let moved = s.head() - Vec2::new(400.0, 300.0);
    assert!((moved.length() - 2.0).abs() < 1e-4);
    assert!(moved.x < 0.0 && moved.y > 0.0);
}

#[test]
fn random_headings_cover_all_eight_directions() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..400 {
        seen.insert(Heading::random(&mut rng));
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn heads_stay_within_margin_for_a_thousand_ticks() {
    let mut rng = StdRng::seed_from_u64(2024);
    let vp = Viewport::new(800.0, 600.0);
    let t = theme(Intensity::High, Style::Modern);
    let mut pool = SnakePool::seed(&mut rng, &t, vp);
    for _ in 0..1000 {
        pool.update(&mut rng, vp, 1.0);
        for h in pool.heads() {
            assert!((-50.0..=850.0).contains(&h.x), "x out of range: {}", h.x);
            assert!((-50.0..=650.0).contains(&h.y), "y out of range: {}", h.y);
        }
    }
}

#[test]
fn modern_draw_highlights_first_three_segments() {
    let t = theme(Intensity::Low, Style::Modern);
    let s = Snake::with_start(Vec2::new(100.0, 100.0), Heading::Right, 60.0, 1.0, 4.0, t.trail_length);
    let mut rec = Recorder::new(800.0, 600.0);
    s.draw(&mut rec, &t);
    assert_eq!(rec.circles(), t.trail_length);
    assert_eq!(rec.count(|c| matches!(c, DrawCall::Highlight { .. })), 3);
    assert_eq!(rec.calls.last(), Some(&DrawCall::Shadow(None)));
}

#[test]
fn plain_styles_draw_circles_only() {
    for style in [Style::Minimal, Style::Elegant] {
        let t = theme(Intensity::Low, style);
        let s = Snake::with_start(Vec2::new(100.0, 100.0), Heading::Right, 60.0, 1.0, 4.0, t.trail_length);
        let mut rec = Recorder::new(800.0, 600.0);
        s.draw(&mut rec, &t);
        assert_eq!(rec.calls.len(), t.trail_length);
        assert_eq!(rec.circles(), t.trail_length);
    }
}

#[test]
fn segment_colors_follow_position() {
    let t = theme(Intensity::Low, Style::Minimal);
    assert_eq!(segment_color(&t, 0), t.primary);
    assert_eq!(segment_color(&t, 1), t.secondary);
    assert_eq!(segment_color(&t, 4), t.secondary);
    assert_eq!(segment_color(&t, 5), t.accent);
}
