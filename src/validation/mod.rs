//! Input validation in front of the search core

pub mod password;
pub mod prompt;
pub mod random;

#[allow(unused_imports)]
pub use password::{InputError, PasswordRules};
#[allow(unused_imports)]
pub use prompt::prompt_for_password;
#[allow(unused_imports)]
pub use random::generate_random_password;
