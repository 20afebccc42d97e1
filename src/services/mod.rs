pub mod catalog;
pub mod m3u_parser;
pub mod resolver;
pub mod session_store;
pub mod xtream;

#[cfg(test)]
pub mod test_support;
