mod country;
mod timeline;

pub use country::{Country, CountryInfo};
pub use timeline::{CasesTimeline, TimelinePoint};
