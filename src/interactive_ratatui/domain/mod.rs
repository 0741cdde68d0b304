pub mod models;
pub mod pagination;

#[cfg(test)]
mod pagination_test;
