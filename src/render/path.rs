use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Point, Segment};

/// Logical drawing channel of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenRole {
    /// Main visible stroke.
    Stroke,
    /// Wide transparent stroke used for hit-testing.
    Hover,
    /// Fill for the bullish profit target.
    BullishTarget,
    /// Fill for the bearish profit target.
    BearishTarget,
    /// Secondary stroke styled independently from `Stroke`.
    Trend,
}

impl PenRole {
    /// Stacking order used by backends; higher draws later.
    #[must_use]
    pub const fn z_index(self) -> i32 {
        match self {
            Self::BullishTarget | Self::BearishTarget => 0,
            Self::Stroke | Self::Trend => 1,
            Self::Hover => 2,
        }
    }

    #[must_use]
    pub const fn is_fill(self) -> bool {
        matches!(self, Self::BullishTarget | Self::BearishTarget)
    }
}

/// One drawing command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

impl PathCommand {
    #[must_use]
    pub fn point(self) -> Point {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => Point::new(x, y),
        }
    }
}

/// Ordered command list for one pen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pen {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Pen {
    /// Drops all commands while keeping the allocation.
    pub fn clear(&mut self) -> &mut Self {
        self.commands.clear();
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    /// Appends `segment` as a standalone subpath.
    pub fn segment(&mut self, segment: Segment) -> &mut Self {
        self.move_to(segment.start.x, segment.start.y)
            .line_to(segment.end.x, segment.end.y)
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo { .. }))
            .count()
    }
}

/// Fixed set of pens owned by one annotation.
///
/// Pens keep the order they were declared in. Builders address them by role;
/// writes to a role outside the layout are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSet {
    pens: IndexMap<PenRole, Pen>,
}

impl PathSet {
    #[must_use]
    pub fn with_roles(roles: &[PenRole]) -> Self {
        let pens = roles.iter().map(|role| (*role, Pen::default())).collect();
        Self { pens }
    }

    #[must_use]
    pub fn roles(&self) -> Vec<PenRole> {
        self.pens.keys().copied().collect()
    }

    #[must_use]
    pub fn has_role(&self, role: PenRole) -> bool {
        self.pens.contains_key(&role)
    }

    #[must_use]
    pub fn pen(&self, role: PenRole) -> Option<&Pen> {
        self.pens.get(&role)
    }

    pub fn pen_mut(&mut self, role: PenRole) -> Option<&mut Pen> {
        self.pens.get_mut(&role)
    }

    /// Commands of `role`, empty when the role is not part of the layout.
    #[must_use]
    pub fn commands(&self, role: PenRole) -> &[PathCommand] {
        match self.pens.get(&role) {
            Some(pen) => pen.commands(),
            None => &[],
        }
    }

    pub fn clear_all(&mut self) {
        for pen in self.pens.values_mut() {
            pen.clear();
        }
    }

    /// Runs `draw` on every pen listed in `roles` that exists in the layout.
    pub fn draw_on(&mut self, roles: &[PenRole], mut draw: impl FnMut(&mut Pen)) {
        for role in roles {
            if let Some(pen) = self.pens.get_mut(role) {
                draw(pen);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PenRole, &Pen)> {
        self.pens.iter().map(|(role, pen)| (*role, pen))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pens.values().all(Pen::is_empty)
    }
}
