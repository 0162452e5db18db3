pub mod generate_badge;
pub mod normalize;
pub mod send_badge;
pub mod submit_contact;
pub mod validate;

#[cfg(test)]
pub mod test_support;
