pub mod settings;
pub mod units;

pub use settings::Settings;
pub use units::Units;
