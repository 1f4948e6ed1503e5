use crate::entities::UnitId;
use crate::probs::linear::entities::LinearUnit;
use crate::util::FPA;

/// A unit placed on a [`Bar`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cut {
    pub unit: UnitId,
    /// Length consumed on the bar, kerf included
    pub length: f64,
    pub nominal_length: f64,
    /// Offset from the start of the bar
    pub position: f64,
}

/// One linear stock unit and the cuts assigned to it.
/// Cuts are laid out back to back in the order in which they were placed.
#[derive(Clone, Debug)]
pub struct Bar {
    /// 0-based index in the order in which bars were opened
    pub id: usize,
    pub capacity: f64,
    pub cuts: Vec<Cut>,
    pub used_length: f64,
    pub remaining_length: f64,
}

impl Bar {
    pub fn new(id: usize, capacity: f64) -> Self {
        Self {
            id,
            capacity,
            cuts: vec![],
            used_length: 0.0,
            remaining_length: capacity,
        }
    }

    /// True if a piece of `length` still fits on the bar.
    pub fn fits(&self, length: f64) -> bool {
        FPA(self.remaining_length) >= FPA(length)
    }

    /// Places the unit directly after the previous cut and returns its position.
    pub fn place(&mut self, unit: &LinearUnit) -> f64 {
        debug_assert!(self.fits(unit.length));
        let position = self.used_length;
        self.cuts.push(Cut {
            unit: unit.id,
            length: unit.length,
            nominal_length: unit.nominal_length,
            position,
        });
        self.used_length += unit.length;
        self.remaining_length -= unit.length;
        position
    }

    /// Length that would be left over after cutting a piece of `length`.
    pub fn leftover_after(&self, length: f64) -> f64 {
        self.remaining_length - length
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Offcut length
    pub fn waste(&self) -> f64 {
        self.remaining_length
    }

    /// Percentage of the bar consumed by cuts.
    pub fn efficiency(&self) -> f64 {
        self.used_length / self.capacity * 100.0
    }

    pub fn waste_percentage(&self) -> f64 {
        self.remaining_length / self.capacity * 100.0
    }

    /// Display label, e.g. `"BAR-1"` for the first opened bar.
    pub fn label(&self) -> String {
        format!("BAR-{}", self.id + 1)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn unit(item_id: usize, length: f64) -> LinearUnit {
        LinearUnit {
            id: UnitId::new(item_id, 1),
            length,
            nominal_length: length,
        }
    }

    #[test]
    fn cuts_are_laid_out_back_to_back() {
        let mut bar = Bar::new(0, 6000.0);
        assert_eq!(bar.place(&unit(0, 1500.0)), 0.0);
        assert_eq!(bar.place(&unit(1, 1000.0)), 1500.0);
        assert_eq!(bar.place(&unit(2, 1000.0)), 2500.0);
        assert_eq!(bar.used_length, 3500.0);
        assert_eq!(bar.remaining_length, 2500.0);
        assert_eq!(bar.used_length + bar.remaining_length, bar.capacity);
        assert_eq!(bar.label(), "BAR-1");
    }

    #[test_case(&[50.0], 25.0, 150.0; "quarter used")]
    #[test_case(&[50.0, 150.0], 100.0, 0.0; "fully used")]
    #[test_case(&[], 0.0, 200.0; "empty")]
    fn statistics_follow_every_placement(lengths: &[f64], efficiency: f64, waste: f64) {
        let mut bar = Bar::new(0, 200.0);
        for (i, &length) in lengths.iter().enumerate() {
            bar.place(&unit(i, length));
        }
        assert_eq!(bar.efficiency(), efficiency);
        assert_eq!(bar.waste(), waste);
        assert_eq!(bar.waste_percentage(), 100.0 - efficiency);
    }

    #[test]
    fn exact_fit_is_accepted() {
        let mut bar = Bar::new(0, 0.3);
        bar.place(&unit(0, 0.1));
        bar.place(&unit(1, 0.1));
        assert!(bar.fits(0.1));
        assert!(!bar.fits(0.2));
    }
}
