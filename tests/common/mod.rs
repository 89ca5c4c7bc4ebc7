use genetix_lib::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builds engines for tests: a shrunken default config, optional overrides,
/// and optional hand-built cohorts.
#[allow(dead_code)]
pub struct EngineBuilder {
    config: EngineConfig,
    phenotypes: Vec<Phenotype>,
}

#[allow(dead_code)]
impl EngineBuilder {
    pub fn new() -> Self {
        let mut config = EngineConfig::default();
        config.arena = ArenaConfig {
            width: 200.0,
            height: 200.0,
            wrap_x: false,
            wrap_y: false,
        };
        config.population = PopulationConfig {
            size: 4,
            genome_length: 8,
            spawn_x: 0.0,
            spawn_y: 0.0,
        };
        config.target = TargetConfig {
            x: 100.0,
            y: 0.0,
            radius: 10.0,
        };
        config.evolution.mutation_rate = 0.0;
        config.seed = Some(1);
        Self {
            config,
            phenotypes: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut EngineConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_phenotype(mut self, phenotype: Phenotype) -> Self {
        self.phenotypes.push(phenotype);
        self
    }

    pub fn build(mut self) -> Engine {
        if self.phenotypes.is_empty() {
            Engine::new(self.config).expect("Failed to create engine in test builder")
        } else {
            self.config.population.size = self.phenotypes.len();
            self.config.population.genome_length = self.phenotypes[0].genome.len();
            let population = Population::from_phenotypes(self.phenotypes);
            Engine::with_population(self.config, population)
                .expect("Failed to create engine in test builder")
        }
    }
}

/// Genome whose every gene points at the same angle.
#[allow(dead_code)]
pub fn straight_genome(length: usize, angle: f64) -> Genome {
    Genome::new(vec![Vec2::from_angle(angle); length])
}

/// Phenotype with a deterministic id, born at `(x, y)`.
#[allow(dead_code)]
pub fn phenotype_at(genome: Genome, x: f64, y: f64) -> Phenotype {
    let seed = (x.to_bits() ^ y.to_bits()).wrapping_mul(0x517C_C1B7_2722_0A95);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Phenotype::from_genome_with_rng(genome, Vec2::new(x, y), &mut rng)
}
