pub mod atlas;
pub mod extract;

#[cfg(test)]
pub mod test_fixture;
