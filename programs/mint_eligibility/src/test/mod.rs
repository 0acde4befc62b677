pub mod test_amounts;
