mod dom;
mod index;

pub use dom::{FormKeys, form_keys, form_owner, is_submitted};
pub use index::{FormIndex, FormRegistry};

#[cfg(test)]
mod tests;
