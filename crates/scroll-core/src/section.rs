use crate::viewport::{raw_section_index, Viewport};

/// What to do when the scroll offset maps past the last tracked object
/// (or before the first, e.g. during an elastic overscroll).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionPolicy {
    /// Clamp the raw index into `[0, count - 1]` before edge detection.
    #[default]
    Clamp,
    /// Drop out-of-range transitions and keep the last valid index.
    Ignore,
}

impl SectionPolicy {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Some(Self::Clamp),
            "ignore" | "noop" => Some(Self::Ignore),
            _ => None,
        }
    }
}

/// Emitted once per distinct section index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange {
    pub previous: usize,
    pub index: usize,
}

/// Edge detector over the rounded scroll position.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    current: usize,
    count: usize,
    policy: SectionPolicy,
}

impl SectionTracker {
    /// The page loads at the top, so the tracker starts at section 0.
    pub fn new(count: usize, policy: SectionPolicy) -> Self {
        Self {
            current: 0,
            count,
            policy,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn policy(&self) -> SectionPolicy {
        self.policy
    }

    pub fn observe(&mut self, scroll_y: f32, viewport: &Viewport) -> Option<SectionChange> {
        let raw = raw_section_index(scroll_y, viewport);
        let index = self.resolve(raw)?;
        if index == self.current {
            return None;
        }
        let change = SectionChange {
            previous: self.current,
            index,
        };
        self.current = index;
        Some(change)
    }

    fn resolve(&self, raw: i64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let last = (self.count - 1) as i64;
        match self.policy {
            SectionPolicy::Clamp => Some(raw.clamp(0, last) as usize),
            SectionPolicy::Ignore => (0..=last).contains(&raw).then_some(raw as usize),
        }
    }
}
