use nalgebra::vector;
use verlet_rope::anchor::Anchors;
use verlet_rope::config::RopeConfig;
use verlet_rope::constraint::max_stretch_error;
use verlet_rope::plot::{plot, plot_rope};
use verlet_rope::rope::Rope;
use verlet_rope::simulate::simulate;
use verlet_rope::types::Float;
use verlet_rope::util::init_stdout_logger;

/// Hang a rope between two anchors closer together than its length, and plot
/// how its midpoint settles into the sag
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let config = RopeConfig::default();
    let rest = config.segment_rest_length;
    let n = config.segment_count;
    let anchors = Anchors::new(vector![0., 0.], vector![6., 0.]);
    let mut rope = Rope::new(&anchors.start, config)?;

    let final_time = 10.0;
    let dt = rope.config().fixed_dt;
    let history = simulate(&mut rope, final_time, dt, |_t| anchors);

    let mid_heights: Vec<Float> = history.iter().map(|p| p[n / 2].y).collect();
    plot(
        &mid_heights,
        final_time,
        dt,
        mid_heights.len(),
        "Rope midpoint height vs. Time",
        "plot.png",
    )?;
    plot_rope(&rope.positions(), "rope.png")?;

    println!("chain length: {}", (n - 1) as Float * rest);
    println!("anchor span: {}", anchors.span());
    println!("final midpoint: {}", rope.positions()[n / 2]);
    println!(
        "max stretch error: {}",
        max_stretch_error(rope.segments(), rest)
    );
    Ok(())
}
