pub mod test_gating;
pub mod test_properties;
