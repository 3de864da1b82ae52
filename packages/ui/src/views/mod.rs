mod shell_layout;
pub use shell_layout::ShellLayoutView;

mod contacts;
pub use contacts::ContactsView;

mod charts;
pub use charts::{ChartsPanel, ChartsView};

mod maps;
pub use maps::{MapsPanel, MapsView};
