/// Small deterministic generator for reproducible test inputs.
#[derive(Clone, Debug)]
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    pub fn gen_range(&mut self, start: usize, end: usize) -> usize {
        assert!(start < end, "invalid range: {start}..{end}");
        let span = (end - start) as u64;
        // High bits of an LCG are the better distributed ones.
        ((self.next_u64() >> 33) % span) as usize + start
    }

    pub fn gen_ratio(&mut self, numerator: u32, denominator: u32) -> bool {
        assert!(denominator > 0, "invalid denominator: {denominator}");
        ((self.next_u64() >> 33) % u64::from(denominator)) < u64::from(numerator)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "cannot pick from an empty slice");
        &items[self.gen_range(0, items.len())]
    }

    /// Random text built from `alphabet`, up to `max_len` chars.
    pub fn text(&mut self, alphabet: &[char], max_len: usize) -> String {
        let len = self.gen_range(0, max_len + 1);
        (0..len).map(|_| *self.pick(alphabet)).collect()
    }
}
