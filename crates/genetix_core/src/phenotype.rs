//! Phenotype kinematics, evaluation and mating.
//!
//! A phenotype advances by consuming one gene per tick as an acceleration
//! impulse, then gets evaluated against the arena bounds and the target.
//! Death is terminal and idempotent; the population does the alive-count
//! bookkeeping from the return values of [`PhenotypeLogic::advance`] and
//! [`PhenotypeLogic::evaluate`].

use crate::config::ArenaConfig;
use crate::genome::GenomeLogic;
use genetix_data::{remap, DeathCause, Genome, Phenotype, Target, Vec2};
use rand::Rng;
use uuid::Uuid;

/// Speed cap applied after every acceleration impulse.
pub const MAX_VELOCITY: f64 = 1.0;

/// Read-only world state for one evaluation pass.
pub struct EvalContext<'a> {
    pub target: &'a Target,
    pub arena: &'a ArenaConfig,
}

/// Trait defining the per-tick behaviour of phenotypes.
pub trait PhenotypeLogic: Sized {
    fn spawn_with_rng<R: Rng>(genome_length: usize, position: Vec2, rng: &mut R) -> Self;
    fn from_genome_with_rng<R: Rng>(genome: Genome, position: Vec2, rng: &mut R) -> Self;
    fn advance(&mut self) -> bool;
    fn evaluate(&mut self, ctx: &EvalContext<'_>) -> bool;
    fn die(&mut self, cause: DeathCause) -> bool;
    #[must_use]
    fn mate_with_rng<R: Rng>(&self, other: &Self, mutation_rate: f64, rng: &mut R) -> Self;
}

impl PhenotypeLogic for Phenotype {
    /// Fresh phenotype with a random genome, born at `position`.
    fn spawn_with_rng<R: Rng>(genome_length: usize, position: Vec2, rng: &mut R) -> Self {
        let genome = Genome::generate_with_rng(genome_length, rng);
        Self::from_genome_with_rng(genome, position, rng)
    }

    /// Phenotype born at `position` with the given genome: zero velocity,
    /// cursor at the first gene, alive, fitness unset.
    fn from_genome_with_rng<R: Rng>(genome: Genome, position: Vec2, rng: &mut R) -> Self {
        Phenotype {
            id: Uuid::from_u128(rng.gen()),
            genome,
            cursor: 0,
            position,
            velocity: Vec2::ZERO,
            birth_position: position,
            fitness: None,
            death: None,
        }
    }

    /// Consumes the next gene as acceleration and integrates one step.
    ///
    /// Each gene is applied exactly once. A phenotype whose cursor has
    /// reached the genome length dies of exhaustion on the next call.
    /// Returns whether this call killed the phenotype.
    fn advance(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        let Some(gene) = self.genome.gene(self.cursor) else {
            return self.die(DeathCause::Exhausted);
        };
        self.cursor += 1;
        self.velocity = (self.velocity + gene).limit(MAX_VELOCITY);
        self.position += self.velocity;
        false
    }

    /// Boundary handling and fitness scoring for one tick.
    ///
    /// Axes are handled independently, x then y, and the y check runs even
    /// when the x check was lethal. Wrapping teleports to the opposite edge;
    /// otherwise leaving the arena is a wall death. A phenotype inside the
    /// capture radius dies an ordinary death and snaps onto the target.
    ///
    /// Fitness is reassigned on every call that begins alive, so the value
    /// written on the tick the phenotype dies is the one that sticks.
    /// Returns whether this call killed the phenotype.
    fn evaluate(&mut self, ctx: &EvalContext<'_>) -> bool {
        if !self.is_alive() {
            return false;
        }
        let mut newly_dead = false;

        if self.position.x < 0.0 || self.position.x > ctx.arena.width {
            if ctx.arena.wrap_x {
                self.position.x = if self.position.x < 0.0 {
                    ctx.arena.width
                } else {
                    0.0
                };
            } else {
                newly_dead |= self.die(DeathCause::WallHit);
            }
        }
        if self.position.y < 0.0 || self.position.y > ctx.arena.height {
            if ctx.arena.wrap_y {
                self.position.y = if self.position.y < 0.0 {
                    ctx.arena.height
                } else {
                    0.0
                };
            } else {
                newly_dead |= self.die(DeathCause::WallHit);
            }
        }

        let mut dist = self.position.distance(ctx.target.position);
        if ctx.target.captures_at_distance(dist) {
            newly_dead |= self.die(DeathCause::TargetReached);
            self.position = ctx.target.position;
            dist = 0.0;
        }

        let proximity = remap(
            dist,
            0.0,
            ctx.arena.width.max(ctx.arena.height),
            0.5,
            0.0,
        );
        let progress = remap(self.cursor as f64, 0.0, self.genome.len() as f64, 0.5, 0.0);
        // Wall deaths score a hard zero rather than a halved total.
        let raw = if self.hit_wall() {
            0.0
        } else {
            proximity + progress
        };
        self.fitness = Some(raw.clamp(0.0, 1.0));

        newly_dead
    }

    /// Marks the phenotype dead with `cause`.
    ///
    /// Idempotent: only the first call records a cause and reports a fresh
    /// death; the caller decrements the alive count exactly once per
    /// phenotype.
    fn die(&mut self, cause: DeathCause) -> bool {
        if self.death.is_some() {
            return false;
        }
        self.death = Some(cause);
        true
    }

    /// Offspring from two parents.
    ///
    /// The child genome comes from crossover; the child is born at the
    /// *first* parent's birth position (asymmetric by design).
    fn mate_with_rng<R: Rng>(&self, other: &Self, mutation_rate: f64, rng: &mut R) -> Self {
        let genome = self
            .genome
            .crossover_with_rng(&other.genome, mutation_rate, rng);
        Self::from_genome_with_rng(genome, self.birth_position, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn arena(width: f64, height: f64, wrap_x: bool, wrap_y: bool) -> ArenaConfig {
        ArenaConfig {
            width,
            height,
            wrap_x,
            wrap_y,
        }
    }

    fn east_walker(genes: usize) -> Phenotype {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let genome = Genome::new(vec![Vec2::new(1.0, 0.0); genes]);
        Phenotype::from_genome_with_rng(genome, Vec2::ZERO, &mut rng)
    }

    #[test]
    fn test_advance_consumes_one_gene_per_call() {
        let mut p = east_walker(3);
        assert!(!p.advance());
        assert_eq!(p.cursor, 1);
        assert!((p.position.x - 1.0).abs() < 1e-12);
        // Velocity is capped at 1.0, so each further step moves one unit.
        assert!(!p.advance());
        assert!((p.position.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_exhaustion_kills_on_the_attempt_past_the_end() {
        let mut p = east_walker(1);
        assert!(!p.advance());
        assert!(p.is_alive());
        assert_eq!(p.cursor, 1);
        assert!(p.advance());
        assert_eq!(p.death, Some(DeathCause::Exhausted));
        // Cursor never exceeds the genome length.
        assert_eq!(p.cursor, 1);
    }

    #[test]
    fn test_advance_is_noop_when_dead() {
        let mut p = east_walker(3);
        p.die(DeathCause::WallHit);
        let before = p.position;
        assert!(!p.advance());
        assert_eq!(p.position, before);
        assert_eq!(p.cursor, 0);
    }

    #[test]
    fn test_wrap_x_teleports_to_opposite_edge() {
        let mut p = east_walker(10);
        p.position = Vec2::new(-1.0, 50.0);
        let ctx = EvalContext {
            target: &Target::new(Vec2::new(100.0, 0.0), 10.0),
            arena: &arena(200.0, 200.0, true, false),
        };
        assert!(!p.evaluate(&ctx));
        assert_eq!(p.position.x, 200.0);
        assert!(p.is_alive());

        p.position = Vec2::new(201.0, 50.0);
        p.evaluate(&ctx);
        assert_eq!(p.position.x, 0.0);
        assert!(p.is_alive());
    }

    #[test]
    fn test_wall_death_without_wrap_zeroes_fitness() {
        let mut p = east_walker(10);
        p.position = Vec2::new(-1.0, 50.0);
        let ctx = EvalContext {
            target: &Target::new(Vec2::new(100.0, 0.0), 10.0),
            arena: &arena(200.0, 200.0, false, false),
        };
        assert!(p.evaluate(&ctx));
        assert!(!p.is_alive());
        assert!(p.hit_wall());
        assert_eq!(p.fitness, Some(0.0));
    }

    #[test]
    fn test_both_axes_checked_in_one_evaluation() {
        let mut p = east_walker(10);
        p.position = Vec2::new(-1.0, -1.0);
        let ctx = EvalContext {
            target: &Target::new(Vec2::new(100.0, 0.0), 10.0),
            arena: &arena(200.0, 200.0, false, true),
        };
        p.evaluate(&ctx);
        // Died on x, but the y wrap still ran.
        assert!(p.hit_wall());
        assert_eq!(p.position.y, 200.0);
    }

    #[test]
    fn test_capture_snaps_position_and_scores_from_zero_distance() {
        let mut p = east_walker(10);
        p.cursor = 4;
        p.position = Vec2::new(98.0, 0.0);
        let target = Target::new(Vec2::new(100.0, 0.0), 10.0);
        let ctx = EvalContext {
            target: &target,
            arena: &arena(200.0, 200.0, false, false),
        };
        assert!(p.evaluate(&ctx));
        assert_eq!(p.death, Some(DeathCause::TargetReached));
        assert!(!p.hit_wall());
        assert_eq!(p.position, target.position);
        // proximity(0) = 0.5, progress(4/10) = 0.3
        let fitness = p.fitness.expect("fitness assigned on death tick");
        assert!((fitness - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_die_is_idempotent_and_keeps_first_cause() {
        let mut p = east_walker(1);
        assert!(p.die(DeathCause::WallHit));
        assert!(!p.die(DeathCause::TargetReached));
        assert_eq!(p.death, Some(DeathCause::WallHit));
    }

    #[test]
    fn test_mate_uses_first_parent_birth_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let a = Phenotype::from_genome_with_rng(
            Genome::new(vec![Vec2::new(1.0, 0.0); 4]),
            Vec2::new(10.0, 20.0),
            &mut rng,
        );
        let b = Phenotype::from_genome_with_rng(
            Genome::new(vec![Vec2::new(0.0, 1.0); 4]),
            Vec2::new(-5.0, -5.0),
            &mut rng,
        );
        let child = a.mate_with_rng(&b, 0.0, &mut rng);
        assert_eq!(child.birth_position, a.birth_position);
        assert_eq!(child.position, a.birth_position);
        assert_eq!(child.velocity, Vec2::ZERO);
        assert_eq!(child.cursor, 0);
        assert!(child.is_alive());
        assert_eq!(child.fitness, None);
        assert_eq!(child.genome.len(), 4);
        assert_ne!(child.id, a.id);
    }
}
