/// Class carried by the active link of each selector pair.
pub const SELECTED_CLASS: &str = "selected";

/// The four links of the chart mode bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Total,
    Live,
    Week,
    Month,
}

impl Selector {
    pub const ALL: [Selector; 4] = [
        Selector::Total,
        Selector::Live,
        Selector::Week,
        Selector::Month,
    ];

    /// Element id of the link.
    pub fn id(self) -> &'static str {
        match self {
            Selector::Total => "sidebar-total-selector",
            Selector::Live => "sidebar-live-selector",
            Selector::Week => "sidebar-week-selector",
            Selector::Month => "sidebar-month-selector",
        }
    }

    /// The other link of the same pair.
    pub fn counterpart(self) -> Selector {
        match self {
            Selector::Total => Selector::Live,
            Selector::Live => Selector::Total,
            Selector::Week => Selector::Month,
            Selector::Month => Selector::Week,
        }
    }
}

/// Which series and which window the chart shows. Total/Live and Week/Month
/// are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartSelection {
    total: bool,
    month: bool,
}

impl Default for ChartSelection {
    fn default() -> Self {
        ChartSelection {
            total: true,
            month: false,
        }
    }
}

impl ChartSelection {
    pub fn total(&self) -> bool {
        self.total
    }

    pub fn month(&self) -> bool {
        self.month
    }

    pub fn is_selected(&self, selector: Selector) -> bool {
        match selector {
            Selector::Total => self.total,
            Selector::Live => !self.total,
            Selector::Week => !self.month,
            Selector::Month => self.month,
        }
    }

    /// Activates `selector`. Returns `false` if it was already active, in which
    /// case nothing changes.
    pub fn select(&mut self, selector: Selector) -> bool {
        if self.is_selected(selector) {
            return false;
        }
        match selector {
            Selector::Total => self.total = true,
            Selector::Live => self.total = false,
            Selector::Week => self.month = false,
            Selector::Month => self.month = true,
        }
        true
    }
}
