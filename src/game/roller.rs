pub const DIE_SIDES: u8 = 6;

pub trait Roller {
    fn roll(&mut self) -> u8;
}

pub struct ThreadRngRoller {
    rng: rand::rngs::ThreadRng,
}

impl ThreadRngRoller {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Roller for ThreadRngRoller {
    fn roll(&mut self) -> u8 {
        use rand::Rng;
        self.rng.random_range(1..=DIE_SIDES)
    }
}
