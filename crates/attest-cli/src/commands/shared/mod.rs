pub mod working_set;
