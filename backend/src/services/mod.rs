//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the blob store.

pub mod export;
pub mod food;
pub mod image;
pub mod profile;
pub mod user;

pub use export::ExportService;
pub use food::{AddFoodInput, FoodService, UpdateFoodInput};
pub use profile::{ProfileService, UpdateProfileInput};
pub use user::{RegisterInput, UserService};
