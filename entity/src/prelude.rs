pub use super::answer::Entity as Answer;
pub use super::question::Entity as Question;
pub use super::survey::Entity as Survey;
pub use super::user::Entity as User;
