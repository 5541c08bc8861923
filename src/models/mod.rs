pub mod audit;
pub mod card;
pub mod list;
pub mod project;
pub mod user;

pub use audit::Audit;
pub use card::{Card, CreateCardRequest, UpdateCardRequest};
pub use list::{CreateListRequest, List, UpdateListRequest};
pub use project::{CreateProjectRequest, Project, UpdateProjectRequest};
pub use user::{
    CreateUserRequest, MAX_PASSWORD_BYTES, UpdateUserRequest, User, UserCredentials, UserProfile,
};
