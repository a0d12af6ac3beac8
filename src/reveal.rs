//! Entrance animations.
//!
//! A section starts hidden and flips to visible the first time its root
//! element is observed inside the viewport. The flip is terminal: scrolling
//! the section out and back in never replays the animation.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    #[default]
    NotTriggered,
    Triggered,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::NotTriggered
    }

    /// Feeds one visibility observation. Returns `true` only for the
    /// observation that moves the trigger to [`RevealTrigger::Triggered`].
    pub fn observe(&mut self, visible: bool) -> bool {
        match self {
            Self::NotTriggered if visible => {
                *self = Self::Triggered;
                true
            }
            _ => false,
        }
    }

    pub fn is_triggered(&self) -> bool {
        matches!(self, Self::Triggered)
    }
}

/// Per-child delay for a staggered list: `base + index * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base: Duration,
    pub step: Duration,
}

impl Stagger {
    pub const fn from_millis(base: u64, step: u64) -> Self {
        Self {
            base: Duration::from_millis(base),
            step: Duration::from_millis(step),
        }
    }

    /// List items and cards.
    pub const ITEMS: Stagger = Stagger::from_millis(0, 100);
    /// Timeline entries.
    pub const TIMELINE: Stagger = Stagger::from_millis(0, 200);
    /// Skill bars start filling once their row has faded in.
    pub const SKILL_BARS: Stagger = Stagger::from_millis(500, 100);

    pub fn delay(&self, index: usize) -> Duration {
        self.base + self.step * index as u32
    }

    pub fn offset(self, base: Duration) -> Self {
        Self {
            base: self.base + base,
            ..self
        }
    }

    pub fn style(&self, index: usize) -> String {
        format!("transition-delay: {}ms", self.delay(index).as_millis())
    }
}

/// Where a hidden element rests before it animates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Fade,
    Up,
    Left,
    Right,
    Scale,
}

impl Motion {
    pub fn classes(self, visible: bool) -> &'static str {
        match (self, visible) {
            (Self::Fade, false) => "reveal",
            (Self::Fade, true) => "reveal is-visible",
            (Self::Up, false) => "reveal reveal-up",
            (Self::Up, true) => "reveal reveal-up is-visible",
            (Self::Left, false) => "reveal reveal-left",
            (Self::Left, true) => "reveal reveal-left is-visible",
            (Self::Right, false) => "reveal reveal-right",
            (Self::Right, true) => "reveal reveal-right is-visible",
            (Self::Scale, false) => "reveal reveal-scale",
            (Self::Scale, true) => "reveal reveal-scale is-visible",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealTrigger::new().is_triggered());
    }

    #[test]
    fn triggers_exactly_once() {
        let mut trigger = RevealTrigger::new();
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(!trigger.observe(true));
        assert!(trigger.is_triggered());
    }

    #[test]
    fn stagger_follows_list_order() {
        let delays = (0..4)
            .map(|i| Stagger::SKILL_BARS.delay(i).as_millis())
            .collect::<Vec<_>>();
        assert_eq!(delays, [500, 600, 700, 800]);
        assert_eq!(Stagger::TIMELINE.style(3), "transition-delay: 600ms");
    }

    #[test]
    fn offset_shifts_base_only() {
        let stagger = Stagger::ITEMS.offset(Duration::from_millis(600));
        assert_eq!(stagger.delay(2), Duration::from_millis(800));
    }

    #[test]
    fn visible_classes_extend_hidden_ones() {
        for motion in [Motion::Fade, Motion::Up, Motion::Left, Motion::Right, Motion::Scale] {
            let hidden = motion.classes(false);
            let shown = motion.classes(true);
            assert_eq!(shown, format!("{hidden} is-visible"));
        }
    }
}
