//! # 计分板
//!
//! 三个球筐的计数器，带操作历史栈，可连续撤销。

/// 球筐
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basket {
    A,
    B,
    C,
}

impl Basket {
    fn index(self) -> usize {
        match self {
            Basket::A => 0,
            Basket::B => 1,
            Basket::C => 2,
        }
    }
}

/// 计分板
///
/// 每次 [`record()`](Self::record) 压入操作历史；
/// [`undo()`](Self::undo) 弹出最近一次并回退计数，可连续撤销
/// 直到历史为空。
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    counts: [u32; 3],
    history: Vec<Basket>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记一分
    pub fn record(&mut self, basket: Basket) {
        self.counts[basket.index()] += 1;
        self.history.push(basket);
        tracing::debug!(?basket, total = self.total(), "score recorded");
    }

    /// 撤销最近一次记分；历史为空时返回 `None`
    pub fn undo(&mut self) -> Option<Basket> {
        let basket = self.history.pop()?;
        self.counts[basket.index()] -= 1;
        tracing::debug!(?basket, total = self.total(), "score undone");
        Some(basket)
    }

    /// 清零并丢弃历史（新一局）
    pub fn reset(&mut self) {
        self.counts = [0; 3];
        self.history.clear();
    }

    /// 某个球筐的当前计数
    pub fn count(&self, basket: Basket) -> u32 {
        self.counts[basket.index()]
    }

    /// 总分
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// 可撤销的操作数
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_right_basket() {
        let mut board = ScoreBoard::new();
        board.record(Basket::A);
        board.record(Basket::A);
        board.record(Basket::C);
        assert_eq!(board.count(Basket::A), 2);
        assert_eq!(board.count(Basket::B), 0);
        assert_eq!(board.count(Basket::C), 1);
        assert_eq!(board.total(), 3);
    }

    #[test]
    fn test_undo_reverses_in_lifo_order() {
        let mut board = ScoreBoard::new();
        board.record(Basket::A);
        board.record(Basket::B);

        assert_eq!(board.undo(), Some(Basket::B));
        assert_eq!(board.count(Basket::B), 0);
        assert_eq!(board.undo(), Some(Basket::A));
        assert_eq!(board.total(), 0);
        // 历史空了
        assert_eq!(board.undo(), None);
    }

    #[test]
    fn test_reset_clears_counts_and_history() {
        let mut board = ScoreBoard::new();
        board.record(Basket::B);
        board.record(Basket::C);
        board.reset();
        assert_eq!(board.total(), 0);
        assert_eq!(board.history_len(), 0);
        assert_eq!(board.undo(), None);
    }
}
