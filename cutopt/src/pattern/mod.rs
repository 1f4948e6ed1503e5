/// The FF-CA-01 ring cutting pattern
pub mod ffca01;
