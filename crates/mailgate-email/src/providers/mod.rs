//! Mail provider abstraction and the SendGrid implementation

mod sendgrid;
mod traits;

#[cfg(test)]
pub mod mock;

pub use sendgrid::SendGridProvider;
pub use traits::*;

#[cfg(test)]
pub use mock::MockMailProvider;
