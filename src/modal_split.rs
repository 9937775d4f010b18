use serde::{Deserialize, Serialize};

use crate::{tables::ProjectFactors, Mode, ProjectType};

/// Percentage of trips per travel mode. A split that went through
/// [`ModalSplit::redistribute`] sums to 100, up to integer rounding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ModalSplit {
    pub car: f64,
    pub transit: f64,
    pub bike: f64,
    pub walk: f64,
}

/// Rounds half towards positive infinity
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

impl ModalSplit {
    pub fn new(car: f64, transit: f64, bike: f64, walk: f64) -> Self {
        Self {
            car,
            transit,
            bike,
            walk,
        }
    }

    pub fn get(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Car => self.car,
            Mode::Transit => self.transit,
            Mode::Bike => self.bike,
            Mode::Walk => self.walk,
        }
    }

    /// Returns a copy of this split with `mode` set to `value`
    pub fn with(mut self, mode: Mode, value: f64) -> Self {
        match mode {
            Mode::Car => self.car = value,
            Mode::Transit => self.transit = value,
            Mode::Bike => self.bike = value,
            Mode::Walk => self.walk = value,
        }
        self
    }

    pub fn sum(&self) -> f64 {
        self.car + self.transit + self.bike + self.walk
    }

    /// The modes other than `mode`, in declaration order
    pub fn others(mode: Mode) -> impl Iterator<Item = Mode> {
        Mode::ALL.into_iter().filter(move |m| *m != mode)
    }

    /// Sets `mode` to `value` and rescales the other three modes so that the split
    /// sums to 100 while keeping their relative proportions.
    /// The other modes are rounded to integers; `value` is kept as given.
    /// If the other modes are all zero, the remainder is split equally.
    pub fn redistribute(self, mode: Mode, value: f64) -> Self {
        let remaining = 100.0 - value;
        let others_sum: f64 = Self::others(mode).map(|m| self.get(m)).sum();

        let redistributed = Self::others(mode).fold(self.with(mode, value), |split, other| {
            let share = if others_sum == 0.0 {
                remaining / 3.0
            } else {
                self.get(other) / others_sum * remaining
            };
            split.with(other, round_half_up(share))
        });
        log::debug!("{mode:?} set to {value}: {redistributed:?}");
        redistributed
    }

    /// Returns this split rescaled proportionally to sum exactly to 100.
    /// An all-zero split becomes an equal split.
    pub fn normalized(self) -> Self {
        let sum = self.sum();
        if sum == 0.0 {
            return Self::new(25.0, 25.0, 25.0, 25.0);
        }
        Mode::ALL
            .into_iter()
            .fold(self, |split, m| split.with(m, self.get(m) / sum * 100.0))
    }
}

/// Returns the default "after" split of a project of type `project_type`, obtained by
/// adding the project's default shift to `before` and clamping each mode at zero.
/// The result is not renormalized: clamping can make it sum to more than 100.
pub fn apply_default_shift(before: ModalSplit, project_type: ProjectType) -> ModalSplit {
    let shift = ProjectFactors::new(project_type).shift;
    Mode::ALL.into_iter().fold(before, |after, m| {
        after.with(m, (before.get(m) + shift.get(m)).max(0.0))
    })
}
