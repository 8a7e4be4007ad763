/// Top-level screens. Exactly one is active at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Suites,
    Dining,
    Spa,
    History,
    Reservations,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Suites,
        View::Dining,
        View::Spa,
        View::History,
        View::Reservations,
    ];
}
