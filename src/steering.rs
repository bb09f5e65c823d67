use std::fmt;

use log::info;
use rand::Rng;

use crate::constants::*;
use crate::math;
use crate::types::Vector2D;

/// Wraps `value` into `[0, max)`.
pub fn wrap_coordinate(value: f64, max: f64) -> f64 {
    let wrapped = value.rem_euclid(max);
    // Tiny negatives round up to exactly `max`.
    if wrapped >= max { 0.0 } else { wrapped }
}

#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub target_count: usize,
    pub max_speed: f64,
    pub max_force: f64,
    pub arrival_radius: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            target_count: TARGET_COUNT,
            max_speed: SEEKER_MAX_SPEED,
            max_force: SEEKER_MAX_FORCE,
            arrival_radius: ARRIVAL_RADIUS,
        }
    }
}

// --- Seeker: a point mass that steers toward targets ---
pub struct Seeker {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub heading: f64, // Radians
    pub max_speed: f64,
    pub max_force: f64,
    pub distance_travelled: f64,
}

impl Seeker {
    pub fn new(x: f64, y: f64, max_speed: f64, max_force: f64) -> Self {
        Seeker {
            position: Vector2D::new(x, y),
            velocity: Vector2D::ZERO,
            heading: 0.0,
            max_speed,
            max_force,
            distance_travelled: 0.0,
        }
    }

    /// Accelerates toward `target`, limited by `max_force` per frame and
    /// `max_speed` overall.
    pub fn steer_towards(&mut self, target: &Target) {
        let mut desired = target.position - self.position;
        desired.normalize_to(self.max_speed);

        let mut force = desired - self.velocity;
        force.truncate(self.max_force);

        self.velocity.add(force).truncate(self.max_speed);
    }

    /// Turns the current velocity without changing speed.
    pub fn wander(&mut self, theta: f64) {
        self.velocity.rotate(theta);
    }

    pub fn update(&mut self, width: f64, height: f64) {
        self.position += self.velocity;
        self.distance_travelled += self.velocity.magnitude();

        // Field wrapping
        self.position.x = wrap_coordinate(self.position.x, width);
        self.position.y = wrap_coordinate(self.position.y, height);

        if !self.velocity.is_zero() {
            self.heading = self.velocity.direction();
        }
    }

    pub fn reached(&self, target: &Target, arrival_radius: f64) -> bool {
        math::distance_squared(&self.position, &target.position) <= arrival_radius.powi(2)
    }
}

pub struct Target {
    pub position: Vector2D,
}

impl Target {
    pub fn new(x: f64, y: f64) -> Self {
        Target {
            position: Vector2D::new(x, y),
        }
    }

    pub fn random(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        Target::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SimulationReport {
    pub frames: u64,
    pub targets_reached: u32,
    pub distance_travelled: f64,
    pub final_position: Vector2D,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frames: {}, targets reached: {}, distance travelled: {:.2}, final position: {}",
            self.frames, self.targets_reached, self.distance_travelled, self.final_position
        )
    }
}

pub struct Simulation<R: Rng> {
    pub config: SimulationConfig,
    pub seeker: Seeker,
    pub targets: Vec<Target>,
    rng: R,
    frame_count: u64,
    targets_reached: u32,
}

impl<R: Rng> Simulation<R> {
    pub fn new(config: SimulationConfig, mut rng: R) -> Self {
        let seeker = Seeker::new(
            config.width / 2.0,
            config.height / 2.0,
            config.max_speed,
            config.max_force,
        );
        let targets = (0..config.target_count)
            .map(|_| Target::random(&mut rng, config.width, config.height))
            .collect();

        Simulation {
            config,
            seeker,
            targets,
            rng,
            frame_count: 0,
            targets_reached: 0,
        }
    }

    fn nearest_target(&self) -> Option<usize> {
        self.targets
            .iter()
            .enumerate()
            .map(|(i, target)| (i, math::distance_squared(&self.seeker.position, &target.position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    pub fn step(&mut self) {
        match self.nearest_target() {
            Some(index) => {
                self.seeker.steer_towards(&self.targets[index]);
                self.seeker.update(self.config.width, self.config.height);

                if self.seeker.reached(&self.targets[index], self.config.arrival_radius) {
                    self.targets_reached += 1;
                    info!(
                        "Target reached at {} on frame {} ({} so far)",
                        self.targets[index].position, self.frame_count, self.targets_reached
                    );
                    self.targets[index] =
                        Target::random(&mut self.rng, self.config.width, self.config.height);
                }
            }
            None => {
                let turn = self.rng.gen_range(-WANDER_TURN..WANDER_TURN);
                self.seeker.wander(turn);
                self.seeker.update(self.config.width, self.config.height);
            }
        }

        self.frame_count += 1;
    }

    pub fn run(&mut self, frames: u64) -> SimulationReport {
        for _ in 0..frames {
            self.step();
        }
        self.report()
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            frames: self.frame_count,
            targets_reached: self.targets_reached,
            distance_travelled: self.seeker.distance_travelled,
            final_position: self.seeker.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn wrap_coordinate_into_range() {
        assert_eq!(wrap_coordinate(5.0, 10.0), 5.0);
        assert_eq!(wrap_coordinate(12.0, 10.0), 2.0);
        assert_eq!(wrap_coordinate(-3.0, 10.0), 7.0);
        assert_eq!(wrap_coordinate(10.0, 10.0), 0.0);
    }

    #[test]
    fn wrap_coordinate_tiny_negative_stays_below_max() {
        let wrapped = wrap_coordinate(-1e-17, 80.0);
        assert!((0.0..80.0).contains(&wrapped));

        let mut seeker = Seeker::new(0.0, 5.0, 1.0, 1.0);
        seeker.velocity = Vector2D::new(-1e-17, 0.0);
        seeker.update(80.0, 24.0);
        assert!(seeker.position.x >= 0.0 && seeker.position.x < 80.0);
    }

    #[test]
    fn seeker_reaches_target_in_a_straight_line() {
        let mut seeker = Seeker::new(10.0, 10.0, 1.5, 0.1);
        let target = Target::new(20.0, 10.0);

        let mut frames = 0;
        while !seeker.reached(&target, 1.0) && frames < 200 {
            seeker.steer_towards(&target);
            seeker.update(80.0, 24.0);
            frames += 1;
        }

        assert!(seeker.reached(&target, 1.0));
        assert_eq!(seeker.position.y, 10.0);
        assert_eq!(seeker.heading, 0.0);
    }

    #[test]
    fn steering_respects_limits() {
        let mut seeker = Seeker::new(0.0, 0.0, 2.0, 0.25);
        let target = Target::new(10.0, 5.0);

        seeker.steer_towards(&target);
        assert_relative_eq!(seeker.velocity.magnitude(), 0.25, epsilon = 1e-12);

        for _ in 0..50 {
            seeker.steer_towards(&target);
            assert!(seeker.velocity.magnitude() <= 2.0 + 1e-12);
        }
    }

    #[test]
    fn wander_keeps_speed() {
        let mut seeker = Seeker::new(0.0, 0.0, 1.0, 0.1);
        seeker.velocity = Vector2D::new(0.6, 0.8);
        seeker.wander(1.0);
        assert_relative_eq!(seeker.velocity.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn update_wraps_position() {
        let mut seeker = Seeker::new(79.5, 0.5, 2.0, 1.0);
        seeker.velocity = Vector2D::new(1.0, -1.0);
        seeker.update(80.0, 24.0);
        assert_relative_eq!(seeker.position.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(seeker.position.y, 23.5, epsilon = 1e-12);
    }

    #[test]
    fn simulation_keeps_target_count() {
        let config = SimulationConfig::default();
        let mut simulation = Simulation::new(config, StdRng::seed_from_u64(3));
        let report = simulation.run(600);

        assert_eq!(report.frames, 600);
        assert_eq!(simulation.targets.len(), config.target_count);
        assert!(report.distance_travelled > 0.0);
    }

    #[test]
    fn simulation_without_targets_wanders() {
        let config = SimulationConfig {
            target_count: 0,
            ..SimulationConfig::default()
        };
        let mut simulation = Simulation::new(config, StdRng::seed_from_u64(1));
        simulation.seeker.velocity = Vector2D::new(1.0, 0.0);

        let report = simulation.run(10);
        assert_eq!(report.targets_reached, 0);
        assert_relative_eq!(simulation.seeker.velocity.magnitude(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(report.distance_travelled, 10.0, epsilon = 1e-9);
    }
}
