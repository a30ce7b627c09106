use nalgebra::vector;
use verlet_rope::anchor::Anchors;
use verlet_rope::config::RopeConfig;
use verlet_rope::simulate::RopeSimulator;
use verlet_rope::util::init_stdout_logger;

/// Grow a hanging rope from 10 to 35 points and shrink it back while it
/// keeps simulating
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let config = RopeConfig {
        segment_count: 10,
        ..Default::default()
    };
    let anchors = Anchors::new(vector![0., 0.], vector![2., 0.]);
    let mut sim = RopeSimulator::new(config, anchors)?;

    let frame_dt = 1. / 60.;
    for (frame, count) in [(0, 35), (120, 10), (240, 20)] {
        sim.rope.set_segment_count(count)?;
        for _ in 0..120 {
            sim.advance(frame_dt);
        }
        let positions = sim.render_positions();
        println!(
            "frame {}: {} points, end at {}, lowest y {}",
            frame,
            positions.len(),
            positions[positions.len() - 1],
            positions
                .iter()
                .map(|p| p.y)
                .fold(f32::INFINITY, f32::min)
        );
    }
    Ok(())
}
