pub mod autocomplete;
pub mod help;
pub mod intent;
pub mod outcome;
