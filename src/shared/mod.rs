pub mod constants;
pub mod deserializers;
pub mod pagination;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
