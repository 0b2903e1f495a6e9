//! Transient success and failure notices.
//!
//! The board is the sink for every collaborator outcome: calls are
//! fire-and-forget and never fail. Entries age out on the runtime tick and
//! the board is bounded, so a burst of failures cannot cover the screen.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// One transient message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub body: String,
    expires_at: Instant,
}

/// Most notices shown at once; older ones are displaced first.
const NOTICE_CAPACITY: usize = 4;

/// Bounded board of live notices, oldest first.
#[derive(Debug)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            notices: VecDeque::new(),
            ttl,
        }
    }

    pub fn notify_success(&mut self, title: &'static str, body: String) {
        self.push(NoticeKind::Success, title, body);
    }

    pub fn notify_failure(&mut self, title: &'static str, body: String) {
        self.push(NoticeKind::Failure, title, body);
    }

    fn push(&mut self, kind: NoticeKind, title: &'static str, body: String) {
        if self.notices.len() == NOTICE_CAPACITY {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            kind,
            title,
            body,
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Drop expired notices. Called from the tick handler.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.notices.retain(|notice| notice.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut board = NoticeBoard::new(Duration::from_secs(60));
        board.notify_success("Student deleted", "first".to_string());
        board.notify_failure("There was an issue", "second".to_string());

        let bodies: Vec<&str> = board.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["first", "second"]);
    }

    #[test]
    fn displaces_the_oldest_when_full() {
        let mut board = NoticeBoard::new(Duration::from_secs(60));
        for i in 0..NOTICE_CAPACITY + 2 {
            board.notify_success("Student deleted", format!("notice {i}"));
        }

        assert_eq!(board.len(), NOTICE_CAPACITY);
        let first = board.iter().next().map(|n| n.body.clone());
        assert_eq!(first.as_deref(), Some("notice 2"));
    }

    #[test]
    fn prune_drops_expired_notices() {
        let mut board = NoticeBoard::new(Duration::ZERO);
        board.notify_failure("There was an issue", "gone".to_string());

        board.prune();

        assert!(board.is_empty());
    }

    #[test]
    fn prune_keeps_live_notices() {
        let mut board = NoticeBoard::new(Duration::from_secs(3600));
        board.notify_success("Student deleted", "stays".to_string());

        board.prune();

        assert_eq!(board.len(), 1);
    }
}
