pub mod kinetics_examples;
