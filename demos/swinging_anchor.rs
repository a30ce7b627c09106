use nalgebra::vector;
use verlet_rope::anchor::Anchors;
use verlet_rope::config::RopeConfig;
use verlet_rope::energy::kinetic_energy;
use verlet_rope::plot::plot;
use verlet_rope::rope::Rope;
use verlet_rope::simulate::simulate;
use verlet_rope::types::Float;
use verlet_rope::util::init_stdout_logger;

/// Drive the end anchor back and forth and plot the horizontal position of
/// the rope's midpoint
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let config = RopeConfig {
        segment_count: 20,
        segment_rest_length: 0.25,
        gravity: [0., -9.81],
        ..Default::default()
    };
    let n = config.segment_count;
    let start = vector![0., 0.];
    let mut rope = Rope::new(&start, config)?;

    let final_time = 8.0;
    let dt = rope.config().fixed_dt;
    let history = simulate(&mut rope, final_time, dt, |t| {
        Anchors::new(start, vector![3. + (2. * t).sin(), 0.5 * t.cos()])
    });

    let mid_x: Vec<Float> = history.iter().map(|p| p[n / 2].x).collect();
    plot(
        &mid_x,
        final_time,
        dt,
        mid_x.len(),
        "Rope midpoint x vs. Time",
        "plot.png",
    )?;

    println!("steps: {}", history.len() - 1);
    println!("kinetic energy at end: {}", kinetic_energy(&rope));
    Ok(())
}
