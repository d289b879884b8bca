use ulid::Ulid;

/// Node id generator.
///
/// Default mode mints ULIDs, which stay unique under rapid bursts of
/// duplicate/expand operations. The seeded mode produces readable
/// sequential ids (`seed-1`, `seed-2`, ...) for tests and fixtures.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    mode: Mode,
}

#[derive(Debug, Clone)]
enum Mode {
    Ulid,
    Seeded { seed: String, count: u32 },
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { mode: Mode::Ulid }
    }

    /// Deterministic generator for tests: ids are `{seed}-{n}` with n
    /// starting at 1.
    pub fn seeded(seed: impl Into<String>) -> Self {
        Self {
            mode: Mode::Seeded {
                seed: seed.into(),
                count: 0,
            },
        }
    }

    /// Mint the next id.
    pub fn new_id(&mut self) -> String {
        match &mut self.mode {
            Mode::Ulid => Ulid::new().to_string(),
            Mode::Seeded { seed, count } => {
                *count += 1;
                format!("{}-{}", seed, count)
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
