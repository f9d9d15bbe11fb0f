//! 挤压次数来源
//!
//! 进入 Squeeze 阶段时需要一个 [2, 4] 内的随机次数。随机源通过
//! [`SqueezeSource`] 注入，测试可以固定结果。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 最少挤压次数
pub const SQUEEZE_MIN: u32 = 2;
/// 最多挤压次数
pub const SQUEEZE_MAX: u32 = 4;

/// 挤压次数来源
pub trait SqueezeSource {
    /// 抽取一次挤压次数，期望落在 [`SQUEEZE_MIN`, `SQUEEZE_MAX`]
    fn draw(&mut self) -> u32;

    /// 可复现时使用的种子
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl<S: SqueezeSource + ?Sized> SqueezeSource for Box<S> {
    fn draw(&mut self) -> u32 {
        (**self).draw()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}

/// 均匀随机的挤压次数
#[derive(Debug, Clone)]
pub struct RandomSqueeze {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomSqueeze {
    /// 使用系统熵初始化
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// 使用固定种子，结果可复现
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// 按可选种子构造
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for RandomSqueeze {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SqueezeSource for RandomSqueeze {
    fn draw(&mut self) -> u32 {
        self.rng.gen_range(SQUEEZE_MIN..=SQUEEZE_MAX)
    }

    /// 熵初始化时为 None
    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// 按顺序循环回放的固定次数
#[derive(Debug, Clone)]
pub struct FixedSqueeze {
    counts: Vec<u32>,
    next: usize,
}

impl FixedSqueeze {
    /// 空列表时退回 [`SQUEEZE_MIN`]
    pub fn new(counts: impl Into<Vec<u32>>) -> Self {
        let mut counts = counts.into();
        if counts.is_empty() {
            counts.push(SQUEEZE_MIN);
        }
        Self { counts, next: 0 }
    }

    /// 每次都返回同一个值
    pub fn always(count: u32) -> Self {
        Self::new(vec![count])
    }
}

impl SqueezeSource for FixedSqueeze {
    fn draw(&mut self) -> u32 {
        let count = self.counts[self.next];
        self.next = (self.next + 1) % self.counts.len();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_squeeze_stays_in_range() {
        let mut source = RandomSqueeze::seeded(7);
        let mut seen = [false; 3];

        for _ in 0..3000 {
            let count = source.draw();
            assert!((SQUEEZE_MIN..=SQUEEZE_MAX).contains(&count));
            seen[(count - SQUEEZE_MIN) as usize] = true;
        }

        // 2、3、4 都应该出现
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_random_squeeze_seed_is_reproducible() {
        let mut a = RandomSqueeze::seeded(42);
        let mut b = RandomSqueeze::seeded(42);
        let draws_a: Vec<u32> = (0..50).map(|_| a.draw()).collect();
        let draws_b: Vec<u32> = (0..50).map(|_| b.draw()).collect();
        assert_eq!(draws_a, draws_b);
        assert_eq!(a.seed(), Some(42));
    }

    #[test]
    fn test_from_seed_option() {
        assert_eq!(RandomSqueeze::from_seed_option(Some(3)).seed(), Some(3));
        assert_eq!(RandomSqueeze::from_seed_option(None).seed(), None);
    }

    #[test]
    fn test_fixed_squeeze_cycles() {
        let mut source = FixedSqueeze::new(vec![3, 2]);
        assert_eq!(source.draw(), 3);
        assert_eq!(source.draw(), 2);
        assert_eq!(source.draw(), 3);
    }

    #[test]
    fn test_fixed_squeeze_empty_falls_back() {
        let mut source = FixedSqueeze::new(Vec::new());
        assert_eq!(source.draw(), SQUEEZE_MIN);
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn SqueezeSource> = Box::new(FixedSqueeze::always(4));
        assert_eq!(source.draw(), 4);
        assert_eq!(source.seed(), None);

        let seeded: Box<dyn SqueezeSource> = Box::new(RandomSqueeze::seeded(8));
        assert_eq!(seeded.seed(), Some(8));
    }
}
