mod fixtures;
mod test_db;

// Not every test binary uses every fixture helper.
#[allow(unused_imports)]
pub use fixtures::*;
pub use test_db::*;
