/// `TestContext`: program loading, state seeding, and run loops.
pub mod harness;
