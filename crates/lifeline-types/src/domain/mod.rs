pub mod card;
pub mod category;
pub mod contact;
pub mod profile;

pub use card::*;
pub use category::*;
pub use contact::*;
pub use profile::*;
