//! Layout policy for the journey timeline.

use crate::{content::Milestone, reveal::Motion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Entries slide in from their own side of the axis.
    pub fn motion(self) -> Motion {
        match self {
            Self::Left => Motion::Left,
            Self::Right => Motion::Right,
        }
    }

    pub fn row_class(self) -> &'static str {
        match self {
            Self::Left => "md:flex-row",
            Self::Right => "md:flex-row-reverse",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Self::Left => "md:pr-8",
            Self::Right => "md:pl-8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub index: usize,
    pub side: Side,
    pub milestone: &'a Milestone,
}

/// Milestones in literal order, each assigned to alternating sides.
pub fn layout(milestones: &[Milestone]) -> impl Iterator<Item = TimelineEntry<'_>> {
    milestones
        .iter()
        .enumerate()
        .map(|(index, milestone)| TimelineEntry {
            index,
            side: Side::for_index(index),
            milestone,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MILESTONES;

    #[test]
    fn keeps_literal_order() {
        let years = layout(MILESTONES)
            .map(|e| e.milestone.year)
            .collect::<Vec<_>>();
        assert_eq!(years, ["2024", "2023", "2022", "2021", "2020", "2019"]);
    }

    #[test]
    fn sides_alternate_from_left() {
        let sides = layout(MILESTONES).map(|e| e.side).collect::<Vec<_>>();
        assert_eq!(sides[0], Side::Left);
        assert!(sides.windows(2).all(|w| w[0] != w[1]));
        assert_eq!(Side::Right.motion(), Motion::Right);
    }
}
