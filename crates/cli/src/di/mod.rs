mod clients;
mod use_cases;

pub use clients::Clients;
pub use use_cases::UseCases;
