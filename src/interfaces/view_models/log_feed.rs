use crossbeam_channel::Receiver;
use std::collections::VecDeque;

/// Bounded buffer of formatted log lines forwarded from the tracing subscriber.
pub struct LogFeed {
    receiver: Receiver<String>,
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogFeed {
    pub fn new(receiver: Receiver<String>, capacity: usize) -> Self {
        Self {
            receiver,
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Pulls everything currently queued without blocking.
    pub fn drain(&mut self) {
        while let Ok(msg) = self.receiver.try_recv() {
            for line in msg.lines().filter(|l| !l.trim().is_empty()) {
                if self.lines.len() >= self.capacity {
                    self.lines.pop_front();
                }
                self.lines.push_back(line.to_string());
            }
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &String> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
