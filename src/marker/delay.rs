//! Sources for per-marker animation delays.

use rand::Rng;

/// Supplies the start offset for each marker's pulse.
///
/// Each call is independent; implementations must not share one seeded
/// sequence across renderers unless a test asks for it.
pub trait DelaySource {
    /// Returns a delay in `[0, bound_ms)` milliseconds.
    fn next_delay_ms(&mut self, bound_ms: u32) -> u32;
}

impl<D: DelaySource + ?Sized> DelaySource for &mut D {
    fn next_delay_ms(&mut self, bound_ms: u32) -> u32 {
        (**self).next_delay_ms(bound_ms)
    }
}

/// Unseeded delays from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomDelay;

impl DelaySource for RandomDelay {
    fn next_delay_ms(&mut self, bound_ms: u32) -> u32 {
        if bound_ms == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound_ms)
    }
}

/// Always the same delay.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub u32);

impl DelaySource for FixedDelay {
    fn next_delay_ms(&mut self, _bound_ms: u32) -> u32 {
        self.0
    }
}

/// Cycles through a fixed list of delays.
#[derive(Debug, Clone)]
pub struct SequenceDelay {
    values: Vec<u32>,
    next: usize,
}

impl SequenceDelay {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl DelaySource for SequenceDelay {
    fn next_delay_ms(&mut self, _bound_ms: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_delay_stays_in_bound() {
        let mut source = RandomDelay;
        for _ in 0..2000 {
            assert!(source.next_delay_ms(1000) < 1000);
        }
        assert_eq!(source.next_delay_ms(0), 0);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut source = SequenceDelay::new([5, 10]);
        let got: Vec<u32> = (0..5).map(|_| source.next_delay_ms(1000)).collect();
        assert_eq!(got, [5, 10, 5, 10, 5]);
        assert_eq!(SequenceDelay::new(Vec::new()).next_delay_ms(1000), 0);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<D: DelaySource>(mut source: D) -> u32 {
            source.next_delay_ms(10)
        }

        let mut inner = SequenceDelay::new([1, 2]);
        assert_eq!(draw(&mut inner), 1);
        assert_eq!(inner.next_delay_ms(10), 2);
    }
}
