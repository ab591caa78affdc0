//! 棋子 ID 配發

use crate::component::PieceId;
use rand::random;
use std::collections::HashSet;

/// 配發隨機棋子 ID，同一盤內不重複
///
/// 被移除的棋子 ID 不回收，存檔重載時會重新配發。
#[derive(Debug, Default, Clone)]
pub struct PieceIdPool {
    issued: HashSet<PieceId>,
}

impl PieceIdPool {
    pub fn issue(&mut self) -> PieceId {
        loop {
            let candidate = PieceId(random());
            if self.issued.insert(candidate) {
                return candidate;
            }
        }
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_ids_are_unique() {
        let mut pool = PieceIdPool::default();
        let ids: HashSet<PieceId> = (0..256).map(|_| pool.issue()).collect();
        assert_eq!(ids.len(), 256);
        assert_eq!(pool.issued_count(), 256);
    }
}
