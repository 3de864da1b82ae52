mod shell;
pub use shell::Shell;

mod contacts;
pub use contacts::Contacts;

mod charts;
pub use charts::Charts;

mod maps;
pub use maps::Maps;

mod not_found;
pub use not_found::NotFound;
